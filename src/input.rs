//! Keyboard to logical key mapping
//!
//! Each logical key is bound to one scancode and tracked through a small
//! state machine, updated once per frame from the raw keyboard snapshot:
//!
//! - down: `None | Released -> Pressed`, `Pressed -> Held`
//! - up: `Pressed | Held -> Released`, `Released -> None`

use crate::host::{InputSource, LogicalKey};

/// Physical key identifier (USB HID usage ids, as used by SDL)
pub type Scancode = u32;

/// Scancodes for the default bindings
pub mod scancode {
    use super::Scancode;

    pub const O: Scancode = 18;
    pub const RETURN: Scancode = 40;
    pub const ESCAPE: Scancode = 41;
    pub const BACKSPACE: Scancode = 42;
    pub const LCTRL: Scancode = 224;
    pub const LSHIFT: Scancode = 225;
    pub const RCTRL: Scancode = 228;
    pub const RSHIFT: Scancode = 229;
}

/// Debounced state of one logical key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    None,
    Pressed,
    Held,
    Released,
}

impl KeyState {
    /// Next state given whether the key is physically down this frame
    pub fn advance(self, down: bool) -> KeyState {
        match (self, down) {
            (KeyState::None | KeyState::Released, true) => KeyState::Pressed,
            (KeyState::Pressed | KeyState::Held, true) => KeyState::Held,
            (KeyState::Pressed | KeyState::Held, false) => KeyState::Released,
            (KeyState::Released | KeyState::None, false) => KeyState::None,
        }
    }
}

/// Logical key states driven by scancode bindings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMapper {
    bindings: [Option<Scancode>; LogicalKey::COUNT],
    states: [KeyState; LogicalKey::COUNT],
}

impl Default for InputMapper {
    fn default() -> Self {
        let mut mapper = Self::unbound();
        mapper.bind(LogicalKey::LeftPaddleUp, scancode::LSHIFT);
        mapper.bind(LogicalKey::LeftPaddleDown, scancode::LCTRL);
        mapper.bind(LogicalKey::RightPaddleUp, scancode::RSHIFT);
        mapper.bind(LogicalKey::RightPaddleDown, scancode::RCTRL);
        mapper.bind(LogicalKey::MenuSelect, scancode::RETURN);
        mapper.bind(LogicalKey::MenuReturn, scancode::BACKSPACE);
        mapper.bind(LogicalKey::Options, scancode::O);
        mapper.bind(LogicalKey::QuitApplication, scancode::ESCAPE);
        mapper
    }
}

impl InputMapper {
    /// Mapper with no bindings; every key reports `None`
    pub fn unbound() -> Self {
        Self {
            bindings: [None; LogicalKey::COUNT],
            states: [KeyState::None; LogicalKey::COUNT],
        }
    }

    /// Bind (or rebind) a logical key, resetting its state
    pub fn bind(&mut self, key: LogicalKey, code: Scancode) {
        self.bindings[key.index()] = Some(code);
        self.states[key.index()] = KeyState::None;
    }

    pub fn binding(&self, key: LogicalKey) -> Option<Scancode> {
        self.bindings[key.index()]
    }

    pub fn state(&self, key: LogicalKey) -> KeyState {
        self.states[key.index()]
    }

    /// Advance every bound key from this frame's keyboard snapshot
    pub fn update(&mut self, is_down: impl Fn(Scancode) -> bool) {
        for key in LogicalKey::ALL {
            let Some(code) = self.bindings[key.index()] else {
                continue;
            };
            let state = &mut self.states[key.index()];
            *state = state.advance(is_down(code));
        }
    }
}

impl InputSource for InputMapper {
    fn key_pressed(&self, key: LogicalKey) -> bool {
        self.state(key) == KeyState::Pressed
    }

    fn key_held(&self, key: LogicalKey) -> bool {
        self.state(key) == KeyState::Held
    }

    fn key_released(&self, key: LogicalKey) -> bool {
        self.state(key) == KeyState::Released
    }

    fn key_none(&self, key: LogicalKey) -> bool {
        self.state(key) == KeyState::None
    }
}
