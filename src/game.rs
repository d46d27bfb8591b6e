//! Frame driver
//!
//! One frame = drain discrete events, sample held keys, advance the simulation
//! by exactly `SIM_DT`, render. The simulation is not delta-adaptive: however
//! late a frame runs, it still advances by one fixed tick. `FrameClock` paces
//! frames at `FRAME_RATE`; the platform layer sleeps until its deadline.

use std::time::{Duration, Instant};

use crate::consts::*;
use crate::platform::{Canvas, InputEvent, Key, KeyboardState, RenderError};
use crate::renderer::{project, submit};
use crate::settings::Settings;
use crate::sim::{GameState, GameStatus, handle_input, update};

/// Game instance holding all simulation state
#[derive(Debug)]
pub struct Game {
    state: GameState,
    pause_on_blur: bool,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: GameState::new(),
            pause_on_blur: settings.pause_on_blur,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Apply one discrete event
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit | InputEvent::KeyPressed(Key::Quit) => self.state.end(),
            InputEvent::KeyPressed(Key::Pause) => self.state.toggle_pause(),
            // Direction keys are read from the held-key state instead
            InputEvent::KeyPressed(Key::Left | Key::Right) => {}
            InputEvent::FocusLost => {
                if self.pause_on_blur && self.state.status == GameStatus::Live {
                    self.state.set_status(GameStatus::Paused);
                }
            }
        }
    }

    /// Run one frame and present it on `canvas`
    pub fn frame<C: Canvas + ?Sized>(
        &mut self,
        events: impl IntoIterator<Item = InputEvent>,
        keys: &KeyboardState,
        canvas: &mut C,
    ) -> Result<(), RenderError> {
        for event in events {
            self.handle_event(event);
        }
        handle_input(&mut self.state, &keys.tick_input());
        update(&mut self.state, SIM_DT);
        submit(&project(&self.state), canvas)
    }

    /// Window title for the current score and status
    pub fn title(&self) -> String {
        let score = self.state.score;
        match self.state.status {
            GameStatus::NotStarted => format!("{TITLE} | Press \u{2190} or \u{2192} to start"),
            GameStatus::Live | GameStatus::End => format!("{TITLE} | Score {score}"),
            GameStatus::Paused => format!("{TITLE} | Score {score} | Paused"),
        }
    }
}

/// Deadline-based pacing for a fixed frame rate
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    next: Instant,
}

impl FrameClock {
    /// First frame is due immediately
    pub fn new(rate: u32, now: Instant) -> Self {
        Self {
            period: Duration::from_secs(1) / rate.max(1),
            next: now,
        }
    }

    #[cfg(test)]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next frame should run
    pub fn deadline(&self) -> Instant {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Schedule the frame after one run at `now`. A frame that ran more than a
    /// full period late resynchronises instead of bursting to catch up.
    pub fn advance(&mut self, now: Instant) {
        self.next += self.period;
        if self.next < now {
            self.next = now + self.period;
        }
    }
}

/// Number of frames averaged for the frame rate
const FPS_WINDOW: usize = 120;

/// Rolling frame rate measurement
#[derive(Debug, Clone)]
pub struct FrameStats {
    frame_times: [Option<Instant>; FPS_WINDOW],
    frame_index: usize,
    last_report: Option<Instant>,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            frame_times: [None; FPS_WINDOW],
            frame_index: 0,
            last_report: None,
        }
    }
}

impl FrameStats {
    pub fn record(&mut self, now: Instant) {
        self.frame_times[self.frame_index] = Some(now);
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
    }

    /// Frames per second over the window, once it has filled
    pub fn fps(&self) -> Option<f32> {
        // The slot about to be overwritten holds the oldest sample
        let oldest = self.frame_times[self.frame_index]?;
        let newest_index = (self.frame_index + FPS_WINDOW - 1) % FPS_WINDOW;
        let newest = self.frame_times[newest_index]?;
        let elapsed = newest.duration_since(oldest).as_secs_f32();
        (elapsed > 0.0).then(|| (FPS_WINDOW - 1) as f32 / elapsed)
    }

    /// Returns the frame rate at most once per second
    pub fn report(&mut self, now: Instant) -> Option<f32> {
        if self
            .last_report
            .is_some_and(|last| now.duration_since(last) < Duration::from_secs(1))
        {
            return None;
        }
        let fps = self.fps()?;
        self.last_report = Some(now);
        Some(fps)
    }
}
