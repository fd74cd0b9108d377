use std::sync::Arc;

use winit::{
    application::ApplicationHandler, dpi::LogicalSize, event::WindowEvent, window::Window,
};

use crate::render::Render;

#[derive(Default)]
pub(crate) enum App {
    Initialized {
        window: Arc<Window>,
        render: Render,
    },
    #[default]
    Uninitialized,
}

impl App {
    fn is_initialized(&self) -> bool {
        !matches!(self, Self::Uninitialized)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        if self.is_initialized() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("iris")
            .with_inner_size(LogicalSize::new(800, 800));

        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .expect("Failed to create Window"),
        );

        let window_size = window.inner_size();

        let render = pollster::block_on(Render::new(
            window.clone(),
            window_size.width,
            window_size.height,
        ))
        .expect("Failed to create render");

        window.request_redraw();

        *self = Self::Initialized { window, render };
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: winit::event::WindowEvent,
    ) {
        let Self::Initialized { window, render } = self else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                render.resize(physical_size.width, physical_size.height);
                window.request_redraw();
            }

            WindowEvent::RedrawRequested => match render.render() {
                Ok(()) => {}
                Err(err) => {
                    log::error!("rendering failed: {err}");
                    event_loop.exit();
                }
            },
            _ => (),
        }
    }
}
