//! Brickbar - a single-ball brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, entities, fixed-step tick)
//! - `renderer`: Draw command projection and the wgpu backend
//! - `platform`: Window, input and canvas seams (winit on native)
//! - `game`: Frame driver tying input, simulation and rendering together
//! - `settings`: User preferences

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameClock, Game};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window title
    pub const TITLE: &str = "Brickbar";
    /// Playfield dimensions (logical pixels)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Frame driver iterations per second
    pub const FRAME_RATE: u32 = 120;

    /// Projectile (the ball) is a square
    pub const PROJECTILE_SIZE: f32 = WINDOW_HEIGHT / 60.0;
    pub const PROJECTILE_SPEED: f32 = 360.0;

    /// Bar (the paddle)
    pub const BAR_LENGTH: f32 = WINDOW_WIDTH / 8.0;
    pub const BAR_THICKNESS: f32 = WINDOW_HEIGHT / 60.0;
    /// Vertical centre of the bar
    pub const BAR_Y: f32 = WINDOW_HEIGHT - BAR_THICKNESS * 3.0;
    pub const BAR_SPEED: f32 = 480.0;

    /// Where the projectile sits when resting on the bar
    pub const PROJECTILE_REST_Y: f32 = BAR_Y - BAR_THICKNESS / 2.0 - PROJECTILE_SIZE - 1.0;

    /// Target grid
    pub const TARGET_ROWS: usize = 5;
    pub const TARGET_COLS: usize = 10;
    pub const TARGET_COUNT: usize = TARGET_ROWS * TARGET_COLS;
    pub const TARGET_PADDING: f32 = 10.0;
    pub const TARGET_HEIGHT: f32 = 20.0;
    pub const TARGET_WIDTH: f32 =
        (WINDOW_WIDTH - (TARGET_COLS as f32 + 1.0) * TARGET_PADDING) / TARGET_COLS as f32;
}
