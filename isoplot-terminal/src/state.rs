/// Immutable view state and the pure key-press handler
use crossterm::event::KeyCode;
use isoplot_core::{Axis, RotationState};

/// Degrees added per key press, the slider-step analog.
pub const STEP_DEGREES: f64 = 5.0;

/// Everything the plotter displays: which shape, how it is rotated, and
/// whether the isometric preset is applied. Handlers take a state and
/// return the next one instead of mutating shared globals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub shape_index: usize,
    pub rotation: RotationState,
    pub isometric: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            shape_index: 0,
            rotation: RotationState::zero(),
            isometric: true,
        }
    }

    #[must_use]
    pub fn rotated(self, axis: Axis, degrees: f64) -> Self {
        Self {
            rotation: self.rotation.rotated(axis, degrees),
            ..self
        }
    }

    #[must_use]
    pub fn with_shape(self, index: usize) -> Self {
        Self {
            shape_index: index,
            ..self
        }
    }

    /// Clear the accumulated rotation, keeping shape and projection mode.
    #[must_use]
    pub fn reset(self) -> Self {
        Self {
            rotation: RotationState::zero(),
            ..self
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the next view state for a key press. Returns `None` when the
/// key quits the application.
pub fn next_state(state: ViewState, code: KeyCode, shape_count: usize) -> Option<ViewState> {
    let next = match code {
        KeyCode::Char('q') | KeyCode::Esc => return None,
        KeyCode::Char('w') | KeyCode::Up => state.rotated(Axis::X, STEP_DEGREES),
        KeyCode::Char('s') | KeyCode::Down => state.rotated(Axis::X, -STEP_DEGREES),
        KeyCode::Char('a') | KeyCode::Left => state.rotated(Axis::Y, -STEP_DEGREES),
        KeyCode::Char('d') | KeyCode::Right => state.rotated(Axis::Y, STEP_DEGREES),
        KeyCode::Char('e') => state.rotated(Axis::Z, STEP_DEGREES),
        KeyCode::Char('r') => state.rotated(Axis::Z, -STEP_DEGREES),
        KeyCode::Char('i') => ViewState {
            isometric: !state.isometric,
            ..state
        },
        KeyCode::Char('0') => state.reset(),
        KeyCode::Tab | KeyCode::Char('n') if shape_count > 0 => {
            state.with_shape((state.shape_index + 1) % shape_count)
        }
        KeyCode::BackTab | KeyCode::Char('p') if shape_count > 0 => {
            state.with_shape((state.shape_index + shape_count - 1) % shape_count)
        }
        _ => state,
    };
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        let state = ViewState::new();
        assert_eq!(next_state(state, KeyCode::Char('q'), 5), None);
        assert_eq!(next_state(state, KeyCode::Esc, 5), None);
    }

    #[test]
    fn test_rotation_accumulates() {
        let state = ViewState::new();
        let state = next_state(state, KeyCode::Char('w'), 5).unwrap();
        let state = next_state(state, KeyCode::Char('w'), 5).unwrap();
        let state = next_state(state, KeyCode::Char('e'), 5).unwrap();
        assert_eq!(
            state.rotation,
            RotationState::new(2.0 * STEP_DEGREES, 0.0, STEP_DEGREES)
        );
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let state = ViewState::new();
        let state = next_state(state, KeyCode::Char('a'), 5).unwrap();
        let state = next_state(state, KeyCode::Char('d'), 5).unwrap();
        assert_eq!(state.rotation, RotationState::zero());
    }

    #[test]
    fn test_isometric_toggle() {
        let state = ViewState::new();
        assert!(state.isometric);
        let state = next_state(state, KeyCode::Char('i'), 5).unwrap();
        assert!(!state.isometric);
        let state = next_state(state, KeyCode::Char('i'), 5).unwrap();
        assert!(state.isometric);
    }

    #[test]
    fn test_shape_cycling_wraps() {
        let state = ViewState::new().with_shape(4);
        let state = next_state(state, KeyCode::Tab, 5).unwrap();
        assert_eq!(state.shape_index, 0);
        let state = next_state(state, KeyCode::BackTab, 5).unwrap();
        assert_eq!(state.shape_index, 4);
    }

    #[test]
    fn test_shape_cycling_with_empty_library() {
        let state = ViewState::new();
        assert_eq!(next_state(state, KeyCode::Tab, 0), Some(state));
    }

    #[test]
    fn test_reset_keeps_shape_and_mode() {
        let state = ViewState::new()
            .with_shape(2)
            .rotated(Axis::Y, 40.0)
            .rotated(Axis::Z, -15.0);
        let reset = next_state(state, KeyCode::Char('0'), 5).unwrap();
        assert_eq!(reset.rotation, RotationState::zero());
        assert_eq!(reset.shape_index, 2);
        assert_eq!(reset.isometric, state.isometric);
    }

    #[test]
    fn test_unbound_key_is_a_no_op() {
        let state = ViewState::new().rotated(Axis::X, 10.0);
        assert_eq!(next_state(state, KeyCode::Char('z'), 5), Some(state));
    }
}
