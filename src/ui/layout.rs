use ratatui::layout::{Constraint, Flex, Layout, Rect};

const CHROME_HEIGHT: u16 = 3;

/// Screen areas of the carousel host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Regions {
    pub header: Rect,
    /// Everything between header and footer, cleared every frame.
    pub body: Rect,
    /// Where cards are drawn and where a press may start a drag.
    pub track: Rect,
    pub footer: Rect,
}

impl Regions {
    /// Stacks header, body and footer. With a `card_height` the track is
    /// centred vertically in the body; without one it fills the body.
    pub fn compute(area: Rect, card_height: Option<u16>) -> Self {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(CHROME_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(CHROME_HEIGHT),
        ])
        .areas(area);

        let track = match card_height {
            Some(height) => {
                let [track] = Layout::vertical([Constraint::Length(height.min(body.height))])
                    .flex(Flex::Center)
                    .areas(body);
                track
            }
            None => body,
        };

        Self {
            header,
            body,
            track,
            footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_wraps_the_body() {
        let regions = Regions::compute(Rect::new(0, 0, 80, 24), None);
        assert_eq!(regions.header, Rect::new(0, 0, 80, 3));
        assert_eq!(regions.body, Rect::new(0, 3, 80, 18));
        assert_eq!(regions.footer, Rect::new(0, 21, 80, 3));
        assert_eq!(regions.track, regions.body);
    }

    #[test]
    fn fixed_card_height_is_centred() {
        let regions = Regions::compute(Rect::new(0, 0, 80, 24), Some(10));
        assert_eq!(regions.track, Rect::new(0, 7, 80, 10));
    }

    #[test]
    fn card_height_never_exceeds_body() {
        let regions = Regions::compute(Rect::new(0, 0, 40, 30), Some(100));
        assert_eq!(regions.track, regions.body);
        assert_eq!(regions.track.height, 24);
    }
}
