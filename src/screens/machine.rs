//! Screen state machine
//!
//! Runs the active screen's tick and render each frame and swaps screens when
//! one is requested: the old screen is exited, the new one built and entered.
//! A `Quit` request stops the machine.

use super::{MainMenuScreen, OptionsScreen, PongScreen, Screen, ScreenKind};
use crate::consts::MAX_FRAME_DT;
use crate::host::{FrameDeps, Windowing};
use crate::settings::Settings;

/// Build a fresh screen for `kind` (`None` for `Quit`)
pub fn make_screen(kind: ScreenKind, settings: &Settings) -> Option<Box<dyn Screen>> {
    match kind {
        ScreenKind::MainMenu => Some(Box::new(MainMenuScreen)),
        ScreenKind::Options => Some(Box::new(OptionsScreen::new(settings.clone()))),
        ScreenKind::Pong => Some(Box::new(PongScreen::new(settings.clone()))),
        ScreenKind::Quit => None,
    }
}

pub struct ScreenStateMachine {
    active: Option<Box<dyn Screen>>,
    settings: Settings,
    frames: u64,
}

impl ScreenStateMachine {
    /// Build and enter the initial screen
    pub fn new(initial: ScreenKind, settings: Settings, windowing: &dyn Windowing) -> Self {
        let mut active = make_screen(initial, &settings);
        if let Some(screen) = active.as_mut() {
            log::info!("Entering {:?}", initial);
            screen.enter(windowing);
        }
        Self {
            active,
            settings,
            frames: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_kind(&self) -> Option<ScreenKind> {
        self.active.as_ref().map(|s| s.kind())
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame; returns `false` once the machine has stopped
    ///
    /// `dt` is clamped to `[0, MAX_FRAME_DT]` so a stalled host does not hand
    /// the simulation a huge step.
    pub fn frame(&mut self, dt: f32, deps: &mut FrameDeps<'_>) -> bool {
        let Some(screen) = self.active.as_mut() else {
            return false;
        };
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.frames += 1;

        let mut requested = None;
        screen.tick(dt, deps, &mut |kind| requested = Some(kind));
        screen.render(&mut *deps.renderer, deps.windowing);

        if let Some(kind) = requested {
            screen.exit();
            log::info!("Screen change {:?} -> {:?}", screen.kind(), kind);

            self.active = make_screen(kind, &self.settings);
            if let Some(next) = self.active.as_mut() {
                next.enter(deps.windowing);
            }
        }

        self.active.is_some()
    }
}
