//! Window and frame loop
//!
//! Everything runs on the event loop thread: each redraw pushes the held
//! keys into the session, lets it catch up on fixed ticks, then draws.

use std::sync::Arc;

use anyhow::Context;
use game_core::{Config, GameSession, SystemEnv};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::input::InputState;
use crate::renderer::{RenderError, Renderer};
use crate::scene::Scene;

pub const WINDOW_TITLE: &str = "Pong";

pub struct PongApp {
    config: Config,
    seed: u64,
    session: Option<GameSession>,
    input: InputState,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    fatal: Option<anyhow::Error>,
}

impl PongApp {
    pub fn new(config: Config, seed: u64) -> Self {
        Self {
            config,
            seed,
            session: None,
            input: InputState::new(),
            window: None,
            renderer: None,
            fatal: None,
        }
    }

    /// The error that stopped the event loop, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.fatal.take()
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(
                self.config.arena_width as f64,
                self.config.arena_height as f64,
            ))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );

        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            self.config.arena_width,
            self.config.arena_height,
        ))
        .context("failed to initialise renderer")?;

        self.window = Some(window);
        self.renderer = Some(renderer);

        // Start the clock only once there is something to look at
        self.session = Some(GameSession::with_config(
            Box::new(SystemEnv::new()),
            self.config.clone(),
            self.seed,
        ));
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if let Some(session) = self.session.as_mut() {
            session.close_requested();
        }
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn frame(&mut self) -> Result<(), RenderError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        for (player_id, dir) in self.input.intents() {
            session.push_intent(player_id, dir);
        }
        session.update();

        let scene = Scene::build(&session.snapshot(), &session.config);
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.draw(&scene)?;
        }
        Ok(())
    }
}

impl ApplicationHandler for PongApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        log::info!(
            "Opening {}x{} window",
            self.config.arena_width,
            self.config.arena_height
        );
        if let Err(err) = self.init_graphics(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed, shutting down");
                if let Some(session) = self.session.as_mut() {
                    session.close_requested();
                }
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.input.clear(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if !event.repeat {
                        self.input
                            .handle_key(code, event.state == ElementState::Pressed);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.frame() {
                    self.fail(event_loop, err.into());
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}
