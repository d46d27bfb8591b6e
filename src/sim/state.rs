//! Game state and core simulation types
//!
//! `GameState` is the single root of all mutable simulation data. The frame
//! driver owns it and is its only mutator.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, rect_of};
use crate::consts::*;

/// Current mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the first directional input
    NotStarted,
    /// Active gameplay
    Live,
    /// Game is paused
    Paused,
    /// Terminal; the frame driver exits on its next boundary check
    End,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Top-left corner
    pub pos: Vec2,
    /// Per-axis sign multiplier, each component in {-1, 0, 1}
    pub dir: IVec2,
}

impl Projectile {
    /// Resting on top of the bar, horizontally centred, heading up
    pub fn on_bar(bar: &Bar) -> Self {
        Self {
            pos: Vec2::new(
                bar.x + BAR_LENGTH / 2.0 - PROJECTILE_SIZE / 2.0,
                PROJECTILE_REST_Y,
            ),
            dir: IVec2::new(0, -1),
        }
    }

    pub fn rect(&self) -> Rect {
        Self::rect_at(self.pos)
    }

    /// Rectangle the projectile would occupy at `pos`
    pub fn rect_at(pos: Vec2) -> Rect {
        rect_of(pos.x, pos.y, PROJECTILE_SIZE, PROJECTILE_SIZE)
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Left edge
    pub x: f32,
    /// Horizontal direction in {-1, 0, 1}
    pub dx: i32,
}

impl Default for Bar {
    fn default() -> Self {
        Self {
            x: (WINDOW_WIDTH - BAR_LENGTH) / 2.0,
            dx: 0,
        }
    }
}

impl Bar {
    pub fn rect(&self) -> Rect {
        Self::rect_at(self.x)
    }

    /// Rectangle the bar would occupy with its left edge at `x`
    pub fn rect_at(x: f32) -> Rect {
        rect_of(x, BAR_Y - BAR_THICKNESS / 2.0, BAR_LENGTH, BAR_THICKNESS)
    }
}

/// A brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Top-left corner
    pub pos: Vec2,
    /// Dead targets are skipped by collision and rendering but keep their slot
    pub dead: bool,
}

impl Target {
    pub fn rect(&self) -> Rect {
        rect_of(self.pos.x, self.pos.y, TARGET_WIDTH, TARGET_HEIGHT)
    }
}

/// Lay out the target grid in row-major order
fn target_grid() -> Vec<Target> {
    let mut targets = Vec::with_capacity(TARGET_COUNT);
    for row in 0..TARGET_ROWS {
        for col in 0..TARGET_COLS {
            let x = TARGET_PADDING + col as f32 * (TARGET_WIDTH + TARGET_PADDING);
            let y = TARGET_PADDING + row as f32 * (TARGET_HEIGHT + TARGET_PADDING);
            targets.push(Target {
                pos: Vec2::new(x, y),
                dead: false,
            });
        }
    }
    targets
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Current mode
    pub status: GameStatus,
    /// Targets destroyed since the last revive
    pub score: u32,
    pub projectile: Projectile,
    pub bar: Bar,
    /// Fixed-size grid; only exposed as slices so it can never be resized
    targets: Vec<Target>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: bar centred, projectile resting on it, every target alive
    pub fn new() -> Self {
        let bar = Bar::default();
        Self {
            status: GameStatus::NotStarted,
            score: 0,
            projectile: Projectile::on_bar(&bar),
            bar,
            targets: target_grid(),
        }
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn targets_mut(&mut self) -> &mut [Target] {
        &mut self.targets
    }

    /// Targets still in play, in grid order
    pub fn live_targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter().filter(|t| !t.dead)
    }

    /// True once every target of the round has been destroyed
    pub fn is_cleared(&self) -> bool {
        self.score as usize == self.targets.len()
    }

    /// Bring every target back and start a new round
    pub fn revive(&mut self) {
        for target in &mut self.targets {
            target.dead = false;
        }
        self.score = 0;
        log::info!("Round cleared, targets revived");
    }

    /// Switch to `status`, logging the transition. `End` is terminal.
    pub fn set_status(&mut self, status: GameStatus) {
        if self.status == status || self.status == GameStatus::End {
            return;
        }
        log::info!("Status {:?} -> {:?}", self.status, status);
        self.status = status;
    }

    /// Flip between Live and Paused; other statuses are unaffected
    pub fn toggle_pause(&mut self) {
        match self.status {
            GameStatus::Live => self.set_status(GameStatus::Paused),
            GameStatus::Paused => self.set_status(GameStatus::Live),
            GameStatus::NotStarted | GameStatus::End => {}
        }
    }

    pub fn end(&mut self) {
        self.set_status(GameStatus::End);
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::End
    }
}
