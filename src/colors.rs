use crossterm::event::KeyCode;
use crossterm::style::Color;

/// What a lit braille dot belongs to. Later variants win when dots share a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Grid = 1,
    Limb = 2,
    Arc = 3,
    Client = 4,
    Server = 5,
    Pulse = 6,
}

impl Layer {
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Layer::Grid),
            2 => Some(Layer::Limb),
            3 => Some(Layer::Arc),
            4 => Some(Layer::Client),
            5 => Some(Layer::Server),
            6 => Some(Layer::Pulse),
            _ => None,
        }
    }
}

/// Shared color scheme state
#[derive(Clone, Copy)]
pub struct ColorState {
    pub scheme: u8,
}

impl ColorState {
    pub fn new(default_scheme: u8) -> Self {
        Self { scheme: default_scheme }
    }

    /// Handle color scheme key input. Returns true if key was handled.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('!') => self.scheme = 1, // Shift+1: fire
            KeyCode::Char('@') => self.scheme = 2, // Shift+2: ice
            KeyCode::Char('#') => self.scheme = 3, // Shift+3: mono
            KeyCode::Char('$') => self.scheme = 4, // Shift+4: neon
            KeyCode::Char(')') => self.scheme = 0, // Shift+0: default blue
            _ => return false,
        }
        true
    }
}

/// Color and boldness for a layer under the given scheme
pub fn layer_color(scheme: u8, layer: Layer) -> (Color, bool) {
    match scheme {
        1 => match layer {  // fire
            Layer::Grid => (Color::DarkRed, false),
            Layer::Limb => (Color::Red, false),
            Layer::Arc => (Color::DarkYellow, false),
            Layer::Client => (Color::Yellow, false),
            Layer::Server => (Color::Yellow, true),
            Layer::Pulse => (Color::White, true),
        },
        2 => match layer {  // ice
            Layer::Grid => (Color::DarkBlue, false),
            Layer::Limb => (Color::Blue, false),
            Layer::Arc => (Color::DarkCyan, false),
            Layer::Client => (Color::Cyan, false),
            Layer::Server => (Color::Cyan, true),
            Layer::Pulse => (Color::White, true),
        },
        3 => match layer {  // mono
            Layer::Grid => (Color::DarkGrey, false),
            Layer::Limb => (Color::Grey, false),
            Layer::Arc => (Color::Grey, false),
            Layer::Client => (Color::White, false),
            Layer::Server => (Color::White, true),
            Layer::Pulse => (Color::White, true),
        },
        4 => match layer {  // neon
            Layer::Grid => (Color::DarkMagenta, false),
            Layer::Limb => (Color::Magenta, false),
            Layer::Arc => (Color::Blue, false),
            Layer::Client => (Color::Cyan, false),
            Layer::Server => (Color::Magenta, true),
            Layer::Pulse => (Color::AnsiValue(13), true),
        },
        _ => match layer {  // default: blue arcs, white pulses
            Layer::Grid => (Color::DarkBlue, false),
            Layer::Limb => (Color::Blue, false),
            Layer::Arc => (Color::Rgb { r: 0x44, g: 0x77, b: 0xff }, false),
            Layer::Client => (Color::Green, false),
            Layer::Server => (Color::Yellow, true),
            Layer::Pulse => (Color::White, true),
        },
    }
}
