//! Shared helpers for driving a carousel the way a pointer would.

#![allow(dead_code)]

use snap_carousel::carousel::{Carousel, CarouselIntent, CarouselOptions, Commit, PulseCounter};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

pub type Writes = Rc<RefCell<Vec<usize>>>;

/// A carousel bound to a recording selection sink and a pulse counter.
pub fn bound_carousel(
    count: usize,
    initial: usize,
    options: CarouselOptions,
) -> (Carousel, PulseCounter, Writes) {
    let pulses = PulseCounter::new();
    let writes: Writes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&writes);
    let carousel = Carousel::new(count, options)
        .with_feedback(pulses.clone())
        .with_selection(initial, move |index| sink.borrow_mut().push(index));
    (carousel, pulses, writes)
}

/// Presses, drags by `translation` and releases at `now`.
pub fn swipe(carousel: &mut Carousel, translation: f32, now: Instant) -> Option<Commit> {
    let origin = 500.0;
    carousel.dispatch_at(CarouselIntent::PointerDown { x: origin }, now);
    carousel.dispatch_at(
        CarouselIntent::PointerMoved {
            x: origin + translation,
        },
        now,
    );
    carousel.dispatch_at(
        CarouselIntent::PointerReleased {
            x: origin + translation,
        },
        now,
    )
}

pub fn written(writes: &Writes) -> Vec<usize> {
    writes.borrow().clone()
}
