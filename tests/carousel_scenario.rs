mod common;

use common::{bound_carousel, swipe, written};
use snap_carousel::carousel::{
    Carousel, CarouselIntent, CarouselOptions, CarouselReducer, CarouselState, Commit,
};
use snap_carousel::ui::mvi::Reducer;
use std::time::{Duration, Instant};

fn layout_options() -> CarouselOptions {
    CarouselOptions {
        spacing: Some(10.0),
        peek_width: Some(30.0),
        ..CarouselOptions::default()
    }
}

#[test]
fn end_to_end_swipe_to_last_card_then_blocked() {
    let (mut carousel, pulses, writes) = bound_carousel(3, 1, layout_options());
    let metrics = carousel.resize(300.0);
    assert_eq!(metrics.spacing, 10.0);
    assert_eq!(metrics.peek_width, 30.0);

    let now = Instant::now();
    let commit = swipe(&mut carousel, -60.0, now);
    assert_eq!(commit, Some(Commit { from: 1, to: 2 }));
    assert_eq!(carousel.index(), 2);
    assert_eq!(pulses.count(), 1);
    assert_eq!(written(&writes), vec![2]);

    let commit = swipe(&mut carousel, -60.0, now);
    assert_eq!(commit, None);
    assert_eq!(carousel.index(), 2);
    assert_eq!(pulses.count(), 1);
    assert_eq!(written(&writes), vec![2]);
}

#[test]
fn mount_sync_fires_nothing() {
    let (carousel, pulses, writes) = bound_carousel(5, 2, CarouselOptions::default());
    assert_eq!(carousel.index(), 2);
    assert_eq!(pulses.count(), 0);
    assert!(written(&writes).is_empty());
}

#[test]
fn commit_rule_holds_for_every_start_index() {
    for count in 1..=6 {
        for start in 0..count {
            let mut state = CarouselState::new(count);
            state.offset.sync_from_external(start);

            let back = swipe_state(state.clone(), 60.0);
            let forward = swipe_state(state.clone(), -60.0);
            let short = swipe_state(state, 10.0);

            let expected_back = if start > 0 { start - 1 } else { start };
            let expected_forward = if start + 1 < count { start + 1 } else { start };
            assert_eq!(back.index(), expected_back, "count {count} start {start}");
            assert_eq!(forward.index(), expected_forward, "count {count} start {start}");
            assert_eq!(short.index(), start, "count {count} start {start}");
        }
    }
}

fn swipe_state(state: CarouselState, translation: f32) -> CarouselState {
    let state = CarouselReducer::reduce(state, CarouselIntent::PointerDown { x: 0.0 });
    CarouselReducer::reduce(state, CarouselIntent::PointerReleased { x: translation })
}

#[test]
fn index_never_leaves_bounds_under_long_swipe_sequences() {
    let (mut carousel, _, _) = bound_carousel(4, 0, CarouselOptions::default());
    let now = Instant::now();
    let pattern = [-80.0, -80.0, -80.0, -80.0, -80.0, 90.0, 10.0, 90.0, 90.0, 90.0, 90.0];
    for translation in pattern {
        swipe(&mut carousel, translation, now);
        assert!(carousel.index() < 4);
    }
    assert_eq!(carousel.index(), 0);
}

#[test]
fn released_drag_renders_like_a_fresh_mount() {
    let now = Instant::now();
    let (mut dragged, _, _) = bound_carousel(3, 1, layout_options());
    dragged.resize(300.0);
    swipe(&mut dragged, 25.0, now);
    assert_eq!(dragged.state().drag_delta(), 0.0);

    let mut fresh = Carousel::new(3, layout_options());
    fresh.resize(300.0);
    fresh.mount(1);

    let settled = now + dragged.options().settle;
    assert_eq!(dragged.visual_offset(settled), fresh.visual_offset(settled));
    assert_eq!(fresh.visual_offset(settled), -230.0);
}

#[test]
fn live_drag_is_never_animated() {
    let now = Instant::now();
    let (mut carousel, _, _) = bound_carousel(3, 0, layout_options());
    carousel.resize(300.0);
    carousel.dispatch_at(CarouselIntent::StepNext, now);
    assert!(carousel.is_settling(now));

    carousel.dispatch_at(CarouselIntent::PointerDown { x: 10.0 }, now);
    carousel.dispatch_at(CarouselIntent::PointerMoved { x: 0.0 }, now);
    assert!(!carousel.is_settling(now));
    assert_eq!(carousel.visual_offset(now), -240.0);
}

#[test]
fn settle_eases_between_release_and_target() {
    let now = Instant::now();
    let options = CarouselOptions {
        settle: Duration::from_millis(200),
        ..layout_options()
    };
    let (mut carousel, _, _) = bound_carousel(3, 0, options);
    carousel.resize(300.0);
    swipe(&mut carousel, -60.0, now);

    let midway = carousel.visual_offset(now + Duration::from_millis(100));
    assert!(midway < -60.0 && midway > -230.0, "midway offset {midway}");
    assert_eq!(
        carousel.visual_offset(now + Duration::from_millis(200)),
        -230.0
    );
}

#[test]
fn external_jump_animates_without_echo() {
    let now = Instant::now();
    let (mut carousel, pulses, writes) = bound_carousel(5, 0, layout_options());
    carousel.resize(300.0);
    let commit = carousel.dispatch_at(CarouselIntent::SetIndex { index: 3 }, now);
    assert_eq!(commit, None);
    assert!(carousel.is_settling(now));
    assert_eq!(pulses.count(), 0);
    assert!(written(&writes).is_empty());
}

#[test]
fn shrinking_deck_keeps_index_valid_and_owner_in_sync() {
    let (mut carousel, pulses, writes) = bound_carousel(5, 4, CarouselOptions::default());
    carousel.set_item_count(2);
    assert_eq!(carousel.index(), 1);
    assert_eq!(pulses.count(), 0);
    assert_eq!(written(&writes), vec![1]);
}

#[test]
fn out_of_range_jump_writes_clamped_index_back() {
    let (mut carousel, pulses, writes) = bound_carousel(3, 0, CarouselOptions::default());
    carousel.set_index(7);
    assert_eq!(carousel.index(), 2);
    assert_eq!(written(&writes), vec![2]);
    carousel.set_index(1);
    assert_eq!(written(&writes), vec![2]);
    assert_eq!(pulses.count(), 0);
}

#[test]
fn resized_mid_settle_still_lands_on_committed_card() {
    let now = Instant::now();
    let (mut carousel, _, _) = bound_carousel(3, 0, layout_options());
    carousel.resize(300.0);
    swipe(&mut carousel, -60.0, now);
    carousel.resize(200.0);

    let settled = now + carousel.options().settle;
    let expected = carousel.metrics().track_offset(1, 0.0);
    assert_eq!(carousel.visual_offset(settled), expected);
}
