use crate::CarouselSettings;

/// What a tick asks the scroll container to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCommand {
    By(f64),
    ToStart,
}

/// Scroll position of one carousel view.
///
/// Offsets are clamped to `[0, content - viewport]`, the range a browser
/// scroll container allows.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    settings: CarouselSettings,
    viewport: f64,
    content: f64,
    offset: f64,
    hovered: bool,
    torn_down: bool,
}

impl Carousel {
    pub fn new(settings: CarouselSettings, viewport: f64, content: f64) -> Self {
        Self {
            settings,
            viewport: viewport.max(0.0),
            content: content.max(0.0),
            offset: 0.0,
            hovered: false,
            torn_down: false,
        }
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn viewport(&self) -> f64 {
        self.viewport
    }

    pub fn content(&self) -> f64 {
        self.content
    }

    pub fn max_offset(&self) -> f64 {
        (self.content - self.viewport).max(0.0)
    }

    pub fn at_end(&self) -> bool {
        self.offset + self.viewport >= self.content - self.settings.end_tolerance
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Advances by one step, or wraps to the start once the end is reached.
    /// Does nothing while hovered or after teardown.
    pub fn tick(&mut self) -> Option<ScrollCommand> {
        if self.hovered || self.torn_down {
            return None;
        }

        if self.at_end() {
            self.offset = 0.0;
            return Some(ScrollCommand::ToStart);
        }

        let step = self.viewport * self.settings.step_ratio;
        self.offset = self.clamp(self.offset + step);

        Some(ScrollCommand::By(step))
    }

    /// Returns `true` when the pointer was not already inside.
    pub fn pointer_enter(&mut self) -> bool {
        !std::mem::replace(&mut self.hovered, true)
    }

    /// Returns `true` when the pointer was inside, i.e. the timer must restart.
    pub fn pointer_leave(&mut self) -> bool {
        std::mem::replace(&mut self.hovered, false)
    }

    /// Manual scrolling, allowed while hovered. Non-finite deltas are ignored.
    pub fn drag(&mut self, delta: f64) {
        if self.torn_down || !delta.is_finite() {
            return;
        }

        self.offset = self.clamp(self.offset + delta);
    }

    pub fn resize(&mut self, viewport: f64, content: f64) {
        self.viewport = viewport.max(0.0);
        self.content = content.max(0.0);
        self.offset = self.clamp(self.offset);
    }

    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel() -> Carousel {
        Carousel::new(CarouselSettings::default(), 1000.0, 3000.0)
    }

    #[test]
    fn ticks_advance_half_a_viewport_then_wrap() {
        let mut carousel = carousel();

        let offsets = (0..6)
            .map(|_| {
                carousel.tick();
                carousel.offset()
            })
            .collect::<Vec<_>>();

        assert_eq!(offsets, vec![500.0, 1000.0, 1500.0, 2000.0, 0.0, 500.0]);
    }

    #[test]
    fn offset_after_n_ticks_is_capped_at_the_wrap_point() {
        for viewport in [400.0, 640.0, 1000.0, 1280.0] {
            let mut carousel = Carousel::new(CarouselSettings::default(), viewport, 4321.0);
            let wrap_point = carousel.max_offset();

            for n in 1..=20u32 {
                let before = carousel.offset();
                let command = carousel.tick();

                if command == Some(ScrollCommand::ToStart) {
                    assert!(before + viewport >= 4321.0 - 10.0);
                    assert_eq!(carousel.offset(), 0.0);
                    break;
                }

                let expected = (f64::from(n) * viewport / 2.0).min(wrap_point);
                assert_eq!(carousel.offset(), expected, "viewport {viewport}, tick {n}");
            }
        }
    }

    #[test]
    fn end_tolerance_wraps_early() {
        let mut carousel = carousel();
        carousel.drag(1995.0);

        assert!(carousel.at_end());
        assert_eq!(carousel.tick(), Some(ScrollCommand::ToStart));
        assert_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn hovered_carousel_does_not_move_on_tick() {
        let mut carousel = carousel();
        carousel.tick();

        assert!(carousel.pointer_enter());
        assert!(!carousel.pointer_enter());
        assert_eq!(carousel.tick(), None);
        assert_eq!(carousel.offset(), 500.0);

        assert!(carousel.pointer_leave());
        assert!(!carousel.pointer_leave());
        assert_eq!(carousel.tick(), Some(ScrollCommand::By(500.0)));
    }

    #[test]
    fn drag_works_while_hovered_and_is_clamped() {
        let mut carousel = carousel();
        carousel.pointer_enter();

        carousel.drag(250.0);
        assert_eq!(carousel.offset(), 250.0);

        carousel.drag(-1000.0);
        assert_eq!(carousel.offset(), 0.0);

        carousel.drag(10_000.0);
        assert_eq!(carousel.offset(), 2000.0);
    }

    #[test]
    fn non_finite_drag_is_ignored() {
        let mut carousel = carousel();
        carousel.drag(300.0);

        for delta in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            carousel.drag(delta);
            assert_eq!(carousel.offset(), 300.0);
        }

        assert_eq!(carousel.tick(), Some(ScrollCommand::By(500.0)));
        assert_eq!(carousel.offset(), 800.0);
    }

    #[test]
    fn content_narrower_than_viewport_stays_at_start() {
        let mut carousel = Carousel::new(CarouselSettings::default(), 1000.0, 800.0);

        assert_eq!(carousel.tick(), Some(ScrollCommand::ToStart));
        carousel.drag(300.0);
        assert_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn resize_reclamps_the_offset() {
        let mut carousel = carousel();
        carousel.drag(2000.0);

        carousel.resize(1500.0, 3000.0);

        assert_eq!(carousel.offset(), 1500.0);
        assert_eq!(carousel.tick(), Some(ScrollCommand::ToStart));
    }

    #[test]
    fn torn_down_carousel_ignores_everything() {
        let mut carousel = carousel();
        carousel.tick();
        carousel.teardown();

        assert_eq!(carousel.tick(), None);
        carousel.drag(100.0);
        assert_eq!(carousel.offset(), 500.0);
    }
}
