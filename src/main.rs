use anyhow::Result;
use winit::event_loop::EventLoop;

use crate::app::App;

mod app;
mod color;
mod disc;
mod pipelines;
mod render;
mod utils;
mod vertex;

fn main() -> Result<()> {
    env_logger::init();
    let event_loop = EventLoop::new()?;

    // Static scene: frames are drawn only when the window system asks.
    event_loop.set_control_flow(winit::event_loop::ControlFlow::Wait);

    let mut app = App::default();

    event_loop.run_app(&mut app)?;

    Ok(())
}
