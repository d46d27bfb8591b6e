//! Platform abstraction layer
//!
//! The simulation never talks to the OS directly. This module defines what it
//! consumes and produces at that boundary:
//! - Input: discrete events plus a queryable held-key state
//! - Output: a `Canvas` that can clear, fill integer rectangles and present
//! - Errors raised while acquiring or using the window and GPU
//!
//! `native` implements all of it with winit + wgpu.

pub mod native;

use crate::renderer::vertex::Color;
use crate::sim::{Rect, TickInput};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Pause,
    Quit,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::Left, Key::Right, Key::Pause, Key::Quit];

    fn index(self) -> usize {
        self as usize
    }
}

/// Discrete input events drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close requested
    Quit,
    /// Key went down (auto-repeat excluded)
    KeyPressed(Key),
    /// Window lost keyboard focus
    FocusLost,
}

/// Continuous key-down state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    down: [bool; Key::ALL.len()],
}

impl KeyboardState {
    pub fn press(&mut self, key: Key) {
        self.down[key.index()] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.down[key.index()] = false;
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down[key.index()]
    }

    /// Release everything (focus loss: key-up events never arrive)
    pub fn clear(&mut self) {
        self.down = Default::default();
    }

    /// Held direction keys as simulation input
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.is_down(Key::Left),
            right: self.is_down(Key::Right),
        }
    }
}

/// Drawing surface the frame driver renders into
pub trait Canvas {
    /// Fill the whole surface, discarding anything drawn before
    fn fill(&mut self, color: Color);
    /// Fill an axis-aligned pixel rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Show everything drawn since the last fill
    fn present(&mut self) -> Result<(), RenderError>;
}

/// Fatal failures while acquiring the window or GPU
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("event loop unavailable: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

/// Per-frame presentation failures
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("surface texture unavailable: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_press_release() {
        let mut keys = KeyboardState::default();
        assert!(!keys.is_down(Key::Left));

        keys.press(Key::Left);
        keys.press(Key::Pause);
        assert!(keys.is_down(Key::Left));
        assert!(keys.is_down(Key::Pause));
        assert!(!keys.is_down(Key::Right));

        keys.release(Key::Left);
        assert!(!keys.is_down(Key::Left));
        assert!(keys.is_down(Key::Pause));
    }

    #[test]
    fn test_keyboard_clear() {
        let mut keys = KeyboardState::default();
        for key in Key::ALL {
            keys.press(key);
        }
        keys.clear();
        assert!(Key::ALL.iter().all(|k| !keys.is_down(*k)));
    }

    #[test]
    fn test_tick_input_from_held_keys() {
        let mut keys = KeyboardState::default();
        assert_eq!(keys.tick_input(), TickInput::default());

        keys.press(Key::Right);
        keys.press(Key::Quit);
        assert_eq!(
            keys.tick_input(),
            TickInput {
                left: false,
                right: true
            }
        );

        keys.press(Key::Left);
        assert_eq!(
            keys.tick_input(),
            TickInput {
                left: true,
                right: true
            }
        );
    }
}
