//! Two-player Pong on a one-minute clock.
//!
//! Player one: W / S. Player two: Up / Down.

mod app;
mod camera;
mod font;
mod hud;
mod input;
mod mesh;
mod renderer;
mod scene;

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use env_logger::{Builder, Env};
use game_core::Config;
use winit::event_loop::{ControlFlow, EventLoop};

use app::PongApp;

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Warn)
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = PongApp::new(Config::default(), seed);
    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
