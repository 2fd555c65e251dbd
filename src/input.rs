use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Axis-aligned movement step in grid cells.
///
/// Doubles as the raw per-frame steering sample, where each axis carries
/// the net effect of freshly pressed keys (at most one unit per axis).
/// The zero value means "no movement requested".
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

impl Delta {
    pub const ZERO: Self = Self { dx: 0, dy: 0 };
    pub const UP: Self = Self { dx: 0, dy: -1 };
    pub const DOWN: Self = Self { dx: 0, dy: 1 };
    pub const LEFT: Self = Self { dx: -1, dy: 0 };
    pub const RIGHT: Self = Self { dx: 1, dy: 0 };

    /// Returns true when both components are zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// Reduces a diagonal sample to its vertical component.
///
/// When both axes arrive in the same sample, the horizontal part is
/// discarded; a buffered direction is always a single axis.
#[must_use]
pub fn vertical_priority(sample: Delta) -> Delta {
    if sample.dx != 0 && sample.dy != 0 {
        Delta {
            dx: 0,
            dy: sample.dy,
        }
    } else {
        sample
    }
}

/// Zeroes every sample axis on which the snake is already moving.
///
/// A 180° reversal and a redundant same-direction press are both parallel
/// to the current direction, so one rule rejects both.
#[must_use]
pub fn filter_steer(sample: Delta, direction: Delta) -> Delta {
    Delta {
        dx: if direction.dx != 0 { 0 } else { sample.dx },
        dy: if direction.dy != 0 { 0 } else { sample.dy },
    }
}

/// Input gathered from the terminal for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Net directional sample from freshly pressed movement keys.
    pub steer: Delta,
    /// True when any key was pressed this frame.
    pub any_key: bool,
    /// True when a quit key (q, Esc, Ctrl-C) was pressed.
    pub quit: bool,
}

impl FrameInput {
    /// Folds one key press into the frame's accumulated input.
    fn apply_key(&mut self, key: &KeyEvent) {
        self.any_key = true;

        match key.code {
            KeyCode::Up | KeyCode::Char('w') => self.steer.dy -= 1,
            KeyCode::Down | KeyCode::Char('s') => self.steer.dy += 1,
            KeyCode::Left | KeyCode::Char('a') => self.steer.dx -= 1,
            KeyCode::Right | KeyCode::Char('d') => self.steer.dx += 1,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }
}

/// Drains pending key events without blocking and returns the frame input.
///
/// Opposite movement keys pressed within one frame cancel each other; the
/// result is clamped to one unit step per axis.
pub fn poll_frame_input() -> io::Result<FrameInput> {
    let mut input = FrameInput::default();

    while event::poll(Duration::ZERO)? {
        let Event::Key(key) = event::read()? else {
            continue;
        };

        if key.kind != KeyEventKind::Press {
            continue;
        }

        input.apply_key(&key);
    }

    input.steer.dx = input.steer.dx.clamp(-1, 1);
    input.steer.dy = input.steer.dy.clamp(-1, 1);

    Ok(input)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{Delta, FrameInput, filter_steer, vertical_priority};

    #[test]
    fn diagonal_sample_keeps_only_vertical() {
        let diagonal = Delta { dx: 1, dy: -1 };
        assert_eq!(vertical_priority(diagonal), Delta::UP);

        let diagonal = Delta { dx: -1, dy: 1 };
        assert_eq!(vertical_priority(diagonal), Delta::DOWN);
    }

    #[test]
    fn single_axis_samples_pass_through_unchanged() {
        assert_eq!(vertical_priority(Delta::LEFT), Delta::LEFT);
        assert_eq!(vertical_priority(Delta::UP), Delta::UP);
        assert_eq!(vertical_priority(Delta::ZERO), Delta::ZERO);
    }

    #[test]
    fn reversal_is_zeroed_by_parallel_filter() {
        assert_eq!(filter_steer(Delta::LEFT, Delta::RIGHT), Delta::ZERO);
        assert_eq!(filter_steer(Delta::UP, Delta::DOWN), Delta::ZERO);
    }

    #[test]
    fn same_direction_press_is_zeroed() {
        assert_eq!(filter_steer(Delta::RIGHT, Delta::RIGHT), Delta::ZERO);
    }

    #[test]
    fn perpendicular_press_survives_the_filter() {
        assert_eq!(filter_steer(Delta::UP, Delta::RIGHT), Delta::UP);
        assert_eq!(filter_steer(Delta::LEFT, Delta::DOWN), Delta::LEFT);
    }

    #[test]
    fn diagonal_sample_loses_its_parallel_axis() {
        let diagonal = Delta { dx: 1, dy: 1 };
        assert_eq!(filter_steer(diagonal, Delta::RIGHT), Delta::DOWN);
        assert_eq!(filter_steer(diagonal, Delta::DOWN), Delta::RIGHT);
    }

    #[test]
    fn zero_direction_filters_nothing() {
        let diagonal = Delta { dx: 1, dy: 1 };
        assert_eq!(filter_steer(diagonal, Delta::ZERO), diagonal);
    }

    #[test]
    fn arrow_and_wasd_keys_accumulate_into_one_sample() {
        let mut input = FrameInput::default();
        input.apply_key(&KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        input.apply_key(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));

        assert_eq!(input.steer, Delta { dx: -1, dy: -1 });
        assert!(input.any_key);
        assert!(!input.quit);
    }

    #[test]
    fn opposite_keys_in_one_frame_cancel() {
        let mut input = FrameInput::default();
        input.apply_key(&KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        input.apply_key(&KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE));

        assert_eq!(input.steer, Delta::ZERO);
        assert!(input.any_key);
    }

    #[test]
    fn quit_keys_are_recognized() {
        let mut input = FrameInput::default();
        input.apply_key(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(input.quit);

        let mut input = FrameInput::default();
        input.apply_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(input.quit);

        let mut input = FrameInput::default();
        input.apply_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!input.quit);
    }

    #[test]
    fn non_movement_keys_still_count_as_any_key() {
        let mut input = FrameInput::default();
        input.apply_key(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));

        assert!(input.any_key);
        assert_eq!(input.steer, Delta::ZERO);
        assert!(!input.quit);
    }
}
