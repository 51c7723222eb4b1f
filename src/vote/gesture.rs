//! Input adapters
//!
//! Taps and swipes are two independent ways into the same `cast_vote`.
//! The adapters here only decide *which* option an input means; the
//! once-only guard lives in the state machine.

use super::machine::{VoteCard, VoteOption};

/// Net vertical displacement a swipe must exceed to count as a vote
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Pressable area covering one option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    A,
    B,
}

impl From<Region> for VoteOption {
    fn from(region: Region) -> Self {
        match region {
            Region::A => VoteOption::A,
            Region::B => VoteOption::B,
        }
    }
}

/// Raw events delivered by the input layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Press released over an option's region
    Press(Region),
    /// Vertical drag finished with this net displacement (positive = down)
    DragEnd(f64),
}

/// Maps input events to vote options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureMapper {
    threshold: f64,
}

impl Default for GestureMapper {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD)
    }
}

impl GestureMapper {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Tap adapter
    pub fn tap(&self, region: Region) -> VoteOption {
        region.into()
    }

    /// Swipe adapter. The boundary itself is not a vote.
    pub fn swipe(&self, displacement: f64) -> Option<VoteOption> {
        if displacement > self.threshold {
            Some(VoteOption::B)
        } else if displacement < -self.threshold {
            Some(VoteOption::A)
        } else {
            None
        }
    }

    pub fn resolve(&self, event: InputEvent) -> Option<VoteOption> {
        match event {
            InputEvent::Press(region) => Some(self.tap(region)),
            InputEvent::DragEnd(displacement) => self.swipe(displacement),
        }
    }

    /// Resolve the event and feed it to the card. Returns `true` on a state change.
    pub fn dispatch(&self, card: &mut VoteCard, event: InputEvent) -> bool {
        match self.resolve(event) {
            Some(option) => card.cast_vote(option),
            None => false,
        }
    }
}

/// How a pointer interaction ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Released where it was pressed
    Tap { column: u16, row: u16 },
    /// Released after moving vertically
    Swipe(f64),
}

/// Tracks a pointer from button down to button up in terminal cells.
///
/// Rows are converted to displacement units with `units_per_row`, so the
/// threshold keeps the same meaning regardless of cell size.
#[derive(Debug, Clone)]
pub struct DragTracker {
    units_per_row: f64,
    origin: Option<(u16, u16)>,
    current_row: u16,
}

impl DragTracker {
    pub fn new(units_per_row: f64) -> Self {
        Self {
            units_per_row,
            origin: None,
            current_row: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    pub fn begin(&mut self, column: u16, row: u16) {
        self.origin = Some((column, row));
        self.current_row = row;
    }

    pub fn update(&mut self, row: u16) {
        if self.origin.is_some() {
            self.current_row = row;
        }
    }

    /// Displacement so far, in units
    pub fn displacement(&self) -> f64 {
        match self.origin {
            Some((_, start)) => (f64::from(self.current_row) - f64::from(start)) * self.units_per_row,
            None => 0.0,
        }
    }

    /// Finish the interaction. `None` if no press was in progress.
    pub fn end(&mut self, row: u16) -> Option<DragOutcome> {
        self.update(row);
        let displacement = self.displacement();
        let (column, start_row) = self.origin.take()?;

        if start_row == self.current_row {
            Some(DragOutcome::Tap {
                column,
                row: start_row,
            })
        } else {
            Some(DragOutcome::Swipe(displacement))
        }
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_maps_region_to_option() {
        let mapper = GestureMapper::default();
        assert_eq!(mapper.resolve(InputEvent::Press(Region::A)), Some(VoteOption::A));
        assert_eq!(mapper.resolve(InputEvent::Press(Region::B)), Some(VoteOption::B));
    }

    #[test]
    fn test_swipe_boundary_is_not_a_vote() {
        let mapper = GestureMapper::default();
        assert_eq!(mapper.swipe(50.0), None);
        assert_eq!(mapper.swipe(-50.0), None);
        assert_eq!(mapper.swipe(0.0), None);
        assert_eq!(mapper.swipe(50.01), Some(VoteOption::B));
        assert_eq!(mapper.swipe(-50.01), Some(VoteOption::A));
    }

    #[test]
    fn test_swipe_nan_is_ignored() {
        assert_eq!(GestureMapper::default().swipe(f64::NAN), None);
    }

    #[test]
    fn test_custom_threshold() {
        let mapper = GestureMapper::new(10.0);
        assert_eq!(mapper.swipe(10.5), Some(VoteOption::B));
        assert_eq!(mapper.swipe(10.0), None);
    }

    #[test]
    fn test_dispatch_only_counts_once() {
        let mapper = GestureMapper::default();
        let mut card = VoteCard::new(10, 20);

        assert!(!mapper.dispatch(&mut card, InputEvent::DragEnd(10.0)));
        assert!(!card.has_voted());

        assert!(mapper.dispatch(&mut card, InputEvent::DragEnd(-75.0)));
        assert!(!mapper.dispatch(&mut card, InputEvent::Press(Region::B)));
        assert_eq!(card.state().count_a, 11);
        assert_eq!(card.state().count_b, 20);
    }

    #[test]
    fn test_drag_tracker_tap() {
        let mut tracker = DragTracker::new(25.0);
        tracker.begin(7, 4);
        assert!(tracker.is_active());
        assert_eq!(tracker.end(4), Some(DragOutcome::Tap { column: 7, row: 4 }));
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_drag_tracker_swipe_uses_scale() {
        let mut tracker = DragTracker::new(25.0);
        tracker.begin(0, 10);
        tracker.update(12);
        tracker.update(13);
        assert_eq!(tracker.displacement(), 75.0);
        assert_eq!(tracker.end(13), Some(DragOutcome::Swipe(75.0)));

        tracker.begin(0, 10);
        assert_eq!(tracker.end(7), Some(DragOutcome::Swipe(-75.0)));
    }

    #[test]
    fn test_drag_tracker_returning_to_origin_is_a_tap() {
        let mut tracker = DragTracker::new(25.0);
        tracker.begin(3, 5);
        tracker.update(9);
        assert_eq!(tracker.end(5), Some(DragOutcome::Tap { column: 3, row: 5 }));
    }

    #[test]
    fn test_drag_tracker_end_without_begin() {
        let mut tracker = DragTracker::new(25.0);
        tracker.update(3);
        assert_eq!(tracker.end(3), None);

        tracker.begin(0, 0);
        tracker.cancel();
        assert_eq!(tracker.end(9), None);
    }
}
