//! Terminal rendering of the connection set

pub mod braille;
pub mod globe;

use crate::colors::ColorState;
use crossterm::event::{KeyCode, KeyModifiers};

/// Runtime state for interactive controls
pub struct VizState {
    pub speed: f32, // frame delay in seconds
    pub paused: bool,
    pub show_help: bool,
    pub colors: ColorState,
}

impl VizState {
    pub fn new(initial_speed: f32) -> Self {
        Self {
            speed: initial_speed,
            paused: false,
            show_help: false,
            colors: ColorState::new(0),
        }
    }

    /// Handle keypress, returns true if should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.colors.handle_key(code) {
            return false;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('?') => self.show_help = !self.show_help,
            // 1 = fastest redraw, 9 = slowest; 0 is taken by zoom reset
            KeyCode::Char(c @ '1'..='9') => {
                self.speed = match c {
                    '1' => 0.01,
                    '2' => 0.02,
                    '3' => 0.03,
                    '4' => 0.05,
                    '5' => 0.07,
                    '6' => 0.1,
                    '7' => 0.15,
                    '8' => 0.2,
                    _ => 0.3,
                };
            }
            _ => {}
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::VizState;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn quit_keys() {
        let mut state = VizState::new(0.03);
        assert!(state.handle_key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(state.handle_key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(state.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!state.handle_key(KeyCode::Char('c'), KeyModifiers::NONE));
    }

    #[test]
    fn toggles_and_speed_presets() {
        let mut state = VizState::new(0.03);
        state.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(state.paused);
        state.handle_key(KeyCode::Char('?'), KeyModifiers::NONE);
        assert!(state.show_help);
        state.handle_key(KeyCode::Char('1'), KeyModifiers::NONE);
        assert!((state.speed - 0.01).abs() < f32::EPSILON);
        state.handle_key(KeyCode::Char('9'), KeyModifiers::NONE);
        assert!((state.speed - 0.3).abs() < f32::EPSILON);
        state.handle_key(KeyCode::Char('0'), KeyModifiers::NONE);
        assert!((state.speed - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn color_keys_do_not_quit() {
        let mut state = VizState::new(0.03);
        assert!(!state.handle_key(KeyCode::Char('$'), KeyModifiers::SHIFT));
        assert_eq!(state.colors.scheme, 4);
    }
}
