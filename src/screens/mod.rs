//! Screens and the state machine that hosts them
//!
//! A screen is entered once, ticked and rendered every frame, and exited when
//! it asks for a different screen through the change-request callback.

pub mod machine;
pub mod main_menu;
pub mod options;
pub mod pong;

pub use machine::{ScreenStateMachine, make_screen};
pub use main_menu::MainMenuScreen;
pub use options::OptionsScreen;
pub use pong::PongScreen;

use crate::host::{FrameDeps, Renderer, Windowing};

/// Screen identifiers, including the request to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    MainMenu,
    Options,
    Pong,
    /// Stop the state machine
    Quit,
}

/// A screen driven by `ScreenStateMachine`
pub trait Screen {
    fn kind(&self) -> ScreenKind;

    /// Called once before the first tick
    fn enter(&mut self, windowing: &dyn Windowing);

    /// Advance by `dt` seconds. Call `change_request` to leave this screen
    /// after the current frame.
    fn tick(
        &mut self,
        dt: f32,
        deps: &mut FrameDeps<'_>,
        change_request: &mut dyn FnMut(ScreenKind),
    );

    fn render(&self, renderer: &mut dyn Renderer, windowing: &dyn Windowing);

    /// Called once after the last render
    fn exit(&mut self);
}

/// Font height used by all screens
pub(crate) const FONT_HEIGHT: i32 = 27;
