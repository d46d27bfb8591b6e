//! Draw command projection
//!
//! Turns a `GameState` into the flat list of colored rectangles that make up a
//! frame. Pure: it never touches the state, so it runs every frame regardless
//! of status and a paused or finished game still shows where everything is.

use super::vertex::{Color, colors};
use crate::platform::{Canvas, RenderError};
use crate::sim::{GameState, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear(Color),
    /// Fill one rectangle
    FillRect(Rect, Color),
}

/// Background, bar, projectile, then every live target in grid order
pub fn project(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(3 + state.targets().len());
    commands.push(DrawCommand::Clear(colors::BACKGROUND));
    commands.push(DrawCommand::FillRect(state.bar.rect(), colors::BAR));
    commands.push(DrawCommand::FillRect(
        state.projectile.rect(),
        colors::PROJECTILE,
    ));
    commands.extend(
        state
            .live_targets()
            .map(|t| DrawCommand::FillRect(t.rect(), colors::TARGET)),
    );
    commands
}

/// Replay `commands` onto `canvas` and present the result
pub fn submit<C: Canvas + ?Sized>(
    commands: &[DrawCommand],
    canvas: &mut C,
) -> Result<(), RenderError> {
    for command in commands {
        match *command {
            DrawCommand::Clear(color) => canvas.fill(color),
            DrawCommand::FillRect(rect, color) => canvas.fill_rect(rect, color),
        }
    }
    canvas.present()
}
