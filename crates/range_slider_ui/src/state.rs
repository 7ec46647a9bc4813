//! Slider interaction state
//!
//! `SliderState` is the only mutable part of a slider. It changes on drag
//! moves and drag release; every other input leaves it alone.

use crate::bounds::Bounds;
use crate::event::Handle;

/// Distances from the pointer value to each endpoint, fixed for one range drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOffsets {
    /// `candidate - start` at the first move of the drag
    pub start: f64,
    /// `end - candidate` at the first move of the drag
    pub end: f64,
}

/// Which part of the slider is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// Not dragging
    #[default]
    Idle,
    /// Dragging the start handle
    Start,
    /// Dragging the end handle
    End,
    /// Dragging the whole range bar; offsets are captured on the first move
    Range { offsets: Option<DragOffsets> },
}

impl DragState {
    /// Check if currently dragging
    pub fn is_dragging(&self) -> bool {
        !matches!(self, DragState::Idle)
    }

    /// Start dragging the given part
    pub fn start_drag(&mut self, handle: Handle) {
        *self = match handle {
            Handle::Start => DragState::Start,
            Handle::End => DragState::End,
            Handle::Range => DragState::Range { offsets: None },
        };
    }

    /// Stop dragging, dropping any captured offsets
    pub fn stop_drag(&mut self) {
        *self = DragState::Idle;
    }

    /// The part being dragged, if any.
    pub fn handle(&self) -> Option<Handle> {
        match self {
            DragState::Idle => None,
            DragState::Start => Some(Handle::Start),
            DragState::End => Some(Handle::End),
            DragState::Range { .. } => Some(Handle::Range),
        }
    }
}

/// Behavior flags that decide which drag moves are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragPolicy {
    /// Single-handle mode: only `start` is meaningful
    pub disable_range: bool,
    /// The range bar cannot be dragged as a whole
    pub disable_range_drag: bool,
    /// Range drags clamp at the bounds instead of being blocked.
    ///
    /// Each endpoint is clamped on its own, so the range can shrink and even
    /// collapse to `start == end` at a bound. That happens when the drag's
    /// first move lands off the bar and the offsets then push both endpoints
    /// past the same bound.
    pub flexible_range: bool,
}

/// Current values and drag state of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    /// Current start value
    pub start: f64,
    /// Current end value (unused in single-handle mode)
    pub end: f64,
    /// Drag interaction state
    pub drag: DragState,
}

impl SliderState {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            drag: DragState::Idle,
        }
    }

    /// Begin a drag on the given part.
    pub fn begin_drag(&mut self, handle: Handle) {
        log::debug!("Slider drag started on {handle}");
        self.drag.start_drag(handle);
    }

    /// Apply a snapped candidate value to whatever is being dragged.
    ///
    /// Returns `true` if the values changed. A rejected move leaves the state
    /// untouched, apart from range offsets captured on the first move.
    pub fn drag_to(&mut self, candidate: f64, bounds: &Bounds, policy: DragPolicy) -> bool {
        match self.drag {
            DragState::Idle => false,
            DragState::Start => self.update_start(candidate, bounds, policy),
            DragState::End => self.update_end(candidate),
            DragState::Range { offsets } => {
                if policy.disable_range_drag {
                    return false;
                }
                let offsets = offsets.unwrap_or(DragOffsets {
                    start: candidate - self.start,
                    end: self.end - candidate,
                });
                self.drag = DragState::Range {
                    offsets: Some(offsets),
                };
                self.update_range(candidate, offsets, bounds, policy)
            }
        }
    }

    /// Finish the current drag.
    ///
    /// Returns `true` if a drag was active.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.drag.is_dragging();
        if was_dragging {
            log::debug!("Slider drag finished at {}..{}", self.start, self.end);
        }
        self.drag.stop_drag();
        was_dragging
    }

    fn update_start(&mut self, candidate: f64, bounds: &Bounds, policy: DragPolicy) -> bool {
        let accepted = if policy.disable_range {
            candidate <= bounds.max()
        } else {
            candidate < self.end
        };

        if !accepted {
            log::trace!("Rejected start {candidate}: end is {}", self.end);
            return false;
        }
        let changed = self.start != candidate;
        self.start = candidate;
        changed
    }

    fn update_end(&mut self, candidate: f64) -> bool {
        if candidate <= self.start {
            log::trace!("Rejected end {candidate}: start is {}", self.start);
            return false;
        }
        let changed = self.end != candidate;
        self.end = candidate;
        changed
    }

    fn update_range(
        &mut self,
        candidate: f64,
        offsets: DragOffsets,
        bounds: &Bounds,
        policy: DragPolicy,
    ) -> bool {
        let start = candidate - offsets.start;
        let end = candidate + offsets.end;

        if !policy.flexible_range && (start < bounds.min() || end > bounds.max()) {
            log::trace!("Rejected range {start}..{end}: outside bounds");
            return false;
        }

        let (start, end) = (bounds.clamp(start), bounds.clamp(end));
        let changed = self.start != start || self.end != end;
        self.start = start;
        self.end = end;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(0.0, 100.0, 1.0).unwrap()
    }

    fn dragging(start: f64, end: f64, handle: Handle) -> SliderState {
        let mut state = SliderState::new(start, end);
        state.begin_drag(handle);
        state
    }

    #[test]
    fn test_drag_state_transitions() {
        let mut drag = DragState::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.handle(), None);

        drag.start_drag(Handle::Range);
        assert!(drag.is_dragging());
        assert_eq!(drag, DragState::Range { offsets: None });

        drag.stop_drag();
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn test_idle_ignores_moves() {
        let mut state = SliderState::new(10.0, 90.0);
        assert!(!state.drag_to(50.0, &bounds(), DragPolicy::default()));
        assert_eq!(state, SliderState::new(10.0, 90.0));
    }

    #[test]
    fn test_start_rejects_candidate_at_or_past_end() {
        let mut state = dragging(10.0, 50.0, Handle::Start);
        let policy = DragPolicy::default();

        assert!(!state.drag_to(50.0, &bounds(), policy));
        assert!(!state.drag_to(70.0, &bounds(), policy));
        assert_eq!(state.start, 10.0);

        assert!(state.drag_to(49.0, &bounds(), policy));
        assert_eq!(state.start, 49.0);
    }

    #[test]
    fn test_single_handle_start_ignores_end() {
        let mut state = dragging(10.0, 20.0, Handle::Start);
        let policy = DragPolicy {
            disable_range: true,
            ..DragPolicy::default()
        };

        assert!(state.drag_to(100.0, &bounds(), policy));
        assert_eq!(state.start, 100.0);
    }

    #[test]
    fn test_end_rejects_candidate_at_or_before_start() {
        let mut state = dragging(30.0, 60.0, Handle::End);
        let policy = DragPolicy::default();

        assert!(!state.drag_to(30.0, &bounds(), policy));
        assert!(!state.drag_to(5.0, &bounds(), policy));
        assert_eq!(state.end, 60.0);

        assert!(state.drag_to(31.0, &bounds(), policy));
        assert_eq!(state.end, 31.0);
    }

    #[test]
    fn test_range_drag_keeps_offsets_from_first_move() {
        let mut state = dragging(20.0, 40.0, Handle::Range);
        let policy = DragPolicy::default();

        // First move only captures offsets
        assert!(!state.drag_to(25.0, &bounds(), policy));
        assert_eq!(
            state.drag,
            DragState::Range {
                offsets: Some(DragOffsets {
                    start: 5.0,
                    end: 15.0
                })
            }
        );

        assert!(state.drag_to(35.0, &bounds(), policy));
        assert_eq!((state.start, state.end), (30.0, 50.0));

        assert!(state.drag_to(10.0, &bounds(), policy));
        assert_eq!((state.start, state.end), (5.0, 25.0));
    }

    #[test]
    fn test_rigid_range_blocks_at_bounds() {
        let mut state = dragging(20.0, 40.0, Handle::Range);
        let policy = DragPolicy::default();

        state.drag_to(30.0, &bounds(), policy);
        // Would become 80..100
        assert!(state.drag_to(90.0, &bounds(), policy));
        // Would become 85..105
        assert!(!state.drag_to(95.0, &bounds(), policy));
        assert_eq!((state.start, state.end), (80.0, 100.0));
        // Would become -5..15
        assert!(!state.drag_to(5.0, &bounds(), policy));
        assert_eq!((state.start, state.end), (80.0, 100.0));
    }

    #[test]
    fn test_flexible_range_clamps_at_bounds() {
        let mut state = dragging(20.0, 40.0, Handle::Range);
        let policy = DragPolicy {
            flexible_range: true,
            ..DragPolicy::default()
        };

        state.drag_to(30.0, &bounds(), policy);
        assert!(state.drag_to(95.0, &bounds(), policy));
        assert_eq!((state.start, state.end), (85.0, 100.0));

        assert!(state.drag_to(0.0, &bounds(), policy));
        assert_eq!((state.start, state.end), (0.0, 10.0));
    }

    #[test]
    fn test_flexible_range_can_collapse_at_bound() {
        let mut state = dragging(20.0, 40.0, Handle::Range);
        let policy = DragPolicy {
            flexible_range: true,
            ..DragPolicy::default()
        };

        // First move left of the bar: offsets become (-20, 40)
        assert!(!state.drag_to(0.0, &bounds(), policy));
        assert!(state.drag_to(100.0, &bounds(), policy));
        assert_eq!((state.start, state.end), (100.0, 100.0));
    }

    #[test]
    fn test_range_drag_disabled_is_inert() {
        let mut state = dragging(20.0, 40.0, Handle::Range);
        let policy = DragPolicy {
            disable_range_drag: true,
            ..DragPolicy::default()
        };

        assert!(!state.drag_to(30.0, &bounds(), policy));
        assert!(!state.drag_to(60.0, &bounds(), policy));
        assert_eq!((state.start, state.end), (20.0, 40.0));
        assert!(state.drag.is_dragging());
    }

    #[test]
    fn test_end_drag_reports_whether_dragging() {
        let mut state = dragging(20.0, 40.0, Handle::Range);
        state.drag_to(30.0, &bounds(), DragPolicy::default());

        assert!(state.end_drag());
        assert_eq!(state.drag, DragState::Idle);
        assert!(!state.end_drag());
    }
}
