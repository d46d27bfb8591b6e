//! Deterministic simulation module
//!
//! Contains all game logic that must be reproducible:
//! - Rectangle geometry and overlap tests
//! - Entities and the game state machine
//! - The fixed-step tick (input, movement, collision response)

pub mod geometry;
pub mod state;
pub mod tick;

pub use geometry::{Rect, overlaps, rect_of};
pub use state::{Bar, GameState, GameStatus, Projectile, Target};
pub use tick::{TickInput, handle_input, update};
