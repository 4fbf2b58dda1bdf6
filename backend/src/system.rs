use super::draw::{Color, DrawCommand};
use super::error::BackendError;
use super::glutils::log_opengl_info;
use super::input::{HeldKeys, Key};
use super::platform::Platform;
use super::renderer::Renderer;
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::video::{GLProfile, SwapInterval};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// 0 disables pacing.
    pub target_fps: u32,
    pub vsync: bool,
}

/// Sleeps away whatever is left of the per-frame budget after presenting.
pub struct FramePacer {
    budget: Duration,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> FramePacer {
        let budget = match target_fps {
            0 => Duration::ZERO,
            fps => Duration::from_secs(1) / fps,
        };
        FramePacer {
            budget,
            frame_start: Instant::now(),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.budget.saturating_sub(elapsed)
    }

    pub fn wait(&mut self) {
        let left = self.remaining(self.frame_start.elapsed());
        if !left.is_zero() {
            ::std::thread::sleep(left);
        }
        self.frame_start = Instant::now();
    }
}

fn scancode(key: Key) -> Scancode {
    match key {
        Key::Right => Scancode::Right,
        Key::Left => Scancode::Left,
        Key::Up => Scancode::Up,
        Key::Down => Scancode::Down,
    }
}

pub struct System {
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_ctx: sdl2::video::GLContext,
    event_pump: sdl2::EventPump,
    renderer: Renderer,
    pacer: FramePacer,
    close_requested: bool,
}

impl System {
    pub fn new(config: &WindowConfig) -> Result<System, BackendError> {
        let sdl_context = sdl2::init().map_err(BackendError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(BackendError::Sdl)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| BackendError::Window(e.to_string()))?;

        let gl_ctx = window
            .gl_create_context()
            .map_err(BackendError::GlContext)?;
        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);

        debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
        debug_assert_eq!(gl_attr.context_version(), (3, 3));

        if config.vsync {
            if let Err(e) = video_subsystem.gl_set_swap_interval(SwapInterval::VSync) {
                log::warn!("vsync unavailable, relying on frame pacing only: {e}");
            }
        }

        log::info!(
            "opened window '{}' {}x{} @ {} fps",
            config.title,
            config.width,
            config.height,
            config.target_fps
        );
        log_opengl_info();

        let renderer = Renderer::new(config.width, config.height)?;
        let event_pump = sdl_context.event_pump().map_err(BackendError::Sdl)?;

        Ok(System {
            sdl_context,
            window,
            video_subsystem,
            gl_ctx,
            event_pump,
            renderer,
            pacer: FramePacer::new(config.target_fps),
            close_requested: false,
        })
    }

    pub fn process_io_events(&mut self) {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    log::debug!("close requested");
                    self.close_requested = true;
                }
                _ => {}
            }
        }
    }

    pub fn held_keys(&self) -> HeldKeys {
        let keyboard = self.event_pump.keyboard_state();
        Key::ALL
            .into_iter()
            .filter(|key| keyboard.is_scancode_pressed(scancode(*key)))
            .collect()
    }
}

impl Platform for System {
    type Error = BackendError;

    fn poll_input(&mut self) -> HeldKeys {
        self.process_io_events();
        self.held_keys()
    }

    fn should_close(&self) -> bool {
        self.close_requested
    }

    fn begin_frame(&mut self, clear: Color) {
        self.renderer.clear(clear);
    }

    fn draw(&mut self, command: &DrawCommand) -> Result<(), BackendError> {
        self.renderer.draw(command)
    }

    fn end_frame(&mut self) {
        self.window.gl_swap_window();
        self.pacer.wait();
    }
}
