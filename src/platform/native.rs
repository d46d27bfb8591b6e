//! Native window and event loop (winit + wgpu)
//!
//! Owns the frame driver for the lifetime of the process. Window events are
//! buffered as they arrive and drained by the next frame; frames run when the
//! `FrameClock` deadline passes and the loop sleeps in between.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use super::{InputEvent, Key, KeyboardState, PlatformError, RenderError};
use crate::consts::*;
use crate::game::{FrameClock, FrameStats, Game};
use crate::renderer::Renderer;
use crate::settings::Settings;

/// Open the window and run until the game ends or the window closes.
///
/// Returns an error only if the window or GPU could not be acquired; by then
/// anything acquired before the failure has already been released.
pub fn run(settings: Settings) -> Result<(), PlatformError> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;
    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Map a physical key to the game's logical keys
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(Key::Left),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Key::Right),
        KeyCode::Space | KeyCode::KeyP => Some(Key::Pause),
        KeyCode::Escape | KeyCode::KeyQ => Some(Key::Quit),
        _ => None,
    }
}

/// Window plus the renderer drawing into it
struct Graphics {
    // Dropped before `window`
    renderer: Renderer,
    window: Arc<Window>,
}

impl Graphics {
    fn acquire(event_loop: &ActiveEventLoop, settings: &Settings) -> Result<Self, PlatformError> {
        let size = LogicalSize::new(
            (WINDOW_WIDTH * settings.window_scale) as f64,
            (WINDOW_HEIGHT * settings.window_scale) as f64,
        );
        let attributes = Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(size)
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attributes)?);
        let renderer = pollster::block_on(Renderer::new(window.clone(), settings.vsync))?;
        Ok(Self { renderer, window })
    }
}

struct App {
    settings: Settings,
    game: Game,
    keyboard: KeyboardState,
    pending: Vec<InputEvent>,
    clock: FrameClock,
    stats: FrameStats,
    title: String,
    graphics: Option<Graphics>,
    error: Option<PlatformError>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let game = Game::new(&settings);
        Self {
            title: String::new(),
            settings,
            game,
            keyboard: KeyboardState::default(),
            pending: Vec::new(),
            clock: FrameClock::new(FRAME_RATE, Instant::now()),
            stats: FrameStats::default(),
            graphics: None,
            error: None,
        }
    }

    fn on_key(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let Some(key) = map_key(code) else {
            return;
        };
        match event.state {
            ElementState::Pressed => {
                self.keyboard.press(key);
                if !event.repeat {
                    self.pending.push(InputEvent::KeyPressed(key));
                }
            }
            ElementState::Released => self.keyboard.release(key),
        }
    }

    fn run_frame(&mut self, now: Instant) {
        let Some(graphics) = self.graphics.as_mut() else {
            return;
        };

        let events = std::mem::take(&mut self.pending);
        match self.game.frame(events, &self.keyboard, &mut graphics.renderer) {
            Ok(()) => {}
            Err(RenderError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                graphics.renderer.reconfigure();
            }
            Err(e) => log::warn!("Frame dropped: {e}"),
        }

        let title = self.game.title();
        if title != self.title {
            graphics.window.set_title(&title);
            self.title = title;
        }

        if self.settings.show_fps {
            self.stats.record(now);
            if let Some(fps) = self.stats.report(now) {
                log::debug!("{fps:.1} fps");
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        match Graphics::acquire(event_loop, &self.settings) {
            Ok(graphics) => {
                log::info!("Window ready, {FRAME_RATE} Hz");
                self.graphics = Some(graphics);
                self.clock = FrameClock::new(FRAME_RATE, Instant::now());
            }
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.pending.push(InputEvent::Quit),
            WindowEvent::KeyboardInput { event, .. } => self.on_key(&event),
            WindowEvent::Focused(false) => {
                self.keyboard.clear();
                self.pending.push(InputEvent::FocusLost);
            }
            WindowEvent::Resized(size) => {
                if let Some(graphics) = self.graphics.as_mut() {
                    graphics.renderer.resize(size.width, size.height);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_none() {
            return;
        }

        let now = Instant::now();
        if self.clock.is_due(now) {
            self.run_frame(now);
            self.clock.advance(now);
        }

        if self.game.is_over() {
            log::info!("Game over, final score {}", self.game.state().score);
            event_loop.exit();
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.deadline()));
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Release the surface and window before the event loop goes away
        self.graphics = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(map_key(KeyCode::ArrowLeft), Some(Key::Left));
        assert_eq!(map_key(KeyCode::KeyA), Some(Key::Left));
        assert_eq!(map_key(KeyCode::ArrowRight), Some(Key::Right));
        assert_eq!(map_key(KeyCode::KeyD), Some(Key::Right));
        assert_eq!(map_key(KeyCode::Space), Some(Key::Pause));
        assert_eq!(map_key(KeyCode::KeyP), Some(Key::Pause));
        assert_eq!(map_key(KeyCode::Escape), Some(Key::Quit));
        assert_eq!(map_key(KeyCode::KeyQ), Some(Key::Quit));
        assert_eq!(map_key(KeyCode::Enter), None);
    }
}
