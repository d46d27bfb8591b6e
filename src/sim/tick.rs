//! Fixed timestep simulation tick
//!
//! Collision response is check-then-reverse: a proposed move that would leave
//! the window or hit something is discarded and the direction on that axis is
//! flipped instead. Nothing ever penetrates, so there is no depth resolution.

use glam::Vec2;

use super::geometry::overlaps;
use super::state::{Bar, GameState, GameStatus, Projectile};
use crate::consts::*;

/// Continuous input sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move-left held
    pub left: bool,
    /// Move-right held
    pub right: bool,
}

/// Apply held direction keys to the bar.
///
/// The right check runs after the left check, so holding both ends with
/// `dx == 1`. While the game is not Live, a directional key also aims the
/// projectile that way and makes the game Live.
pub fn handle_input(state: &mut GameState, input: &TickInput) {
    state.bar.dx = 0;
    if input.left {
        state.bar.dx = -1;
        start(state, -1);
    }
    if input.right {
        state.bar.dx = 1;
        start(state, 1);
    }
}

/// Enter Live, launching the projectile toward `dir`
fn start(state: &mut GameState, dir: i32) {
    if !matches!(state.status, GameStatus::Live | GameStatus::End) {
        state.projectile.dir.x = dir;
        state.set_status(GameStatus::Live);
    }
}

/// Advance the game state by one fixed timestep
pub fn update(state: &mut GameState, dt: f32) {
    if state.status != GameStatus::Live {
        return;
    }

    if state.is_cleared() {
        state.revive();
    }

    // Already embedded in the bar: lift the projectile back on top and skip
    // the rest of the tick
    if overlaps(state.projectile.rect(), state.bar.rect()) {
        state.projectile.pos.y = PROJECTILE_REST_Y;
        return;
    }

    move_bar(state, dt);
    move_projectile(state, Axis::X, dt);
    move_projectile(state, Axis::Y, dt);
}

fn move_bar(state: &mut GameState, dt: f32) {
    let next_x = (state.bar.x + state.bar.dx as f32 * BAR_SPEED * dt)
        .clamp(0.0, WINDOW_WIDTH - BAR_LENGTH);
    if overlaps(Bar::rect_at(next_x), state.projectile.rect()) {
        return;
    }
    state.bar.x = next_x;
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn get(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    fn set(self, v: &mut Vec2, value: f32) {
        match self {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
        }
    }

    /// Largest coordinate that keeps the projectile inside the window
    fn limit(self) -> f32 {
        match self {
            Axis::X => WINDOW_WIDTH - PROJECTILE_SIZE,
            Axis::Y => WINDOW_HEIGHT - PROJECTILE_SIZE,
        }
    }

    fn dir(self, projectile: &Projectile) -> i32 {
        match self {
            Axis::X => projectile.dir.x,
            Axis::Y => projectile.dir.y,
        }
    }

    fn reverse(self, projectile: &mut Projectile) {
        match self {
            Axis::X => projectile.dir.x = -projectile.dir.x,
            Axis::Y => projectile.dir.y = -projectile.dir.y,
        }
    }
}

/// Move the projectile along one axis, bouncing off the window edges, the bar
/// and at most one target.
fn move_projectile(state: &mut GameState, axis: Axis, dt: f32) {
    let current = state.projectile.pos;
    let step = axis.dir(&state.projectile) as f32 * PROJECTILE_SPEED * dt;
    let mut next = current;
    axis.set(&mut next, axis.get(current) + step);

    let coord = axis.get(next);
    if coord < 0.0 || coord > axis.limit() {
        axis.reverse(&mut state.projectile);
        return;
    }

    let rect = Projectile::rect_at(next);
    if overlaps(rect, state.bar.rect()) {
        axis.reverse(&mut state.projectile);
        return;
    }

    let hit = state
        .targets()
        .iter()
        .position(|t| !t.dead && overlaps(rect, t.rect()));
    if let Some(index) = hit {
        state.targets_mut()[index].dead = true;
        state.score += 1;
        axis.reverse(&mut state.projectile);
        log::debug!("Target {} destroyed on {:?}, score {}", index, axis, state.score);
        return;
    }

    state.projectile.pos = next;
}
