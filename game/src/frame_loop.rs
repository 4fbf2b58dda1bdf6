use crate::ball::Ball;
use crate::config::DemoConfig;
use crate::scene;
use backend::{Color, Platform};

/// Input, update, render, present. Repeats until the platform asks to close.
pub struct FrameLoop<P: Platform> {
    platform: P,
    ball: Ball,
    ball_radius: f32,
    background: Color,
    frames: u64,
}

impl<P: Platform> FrameLoop<P> {
    pub fn new(platform: P, config: &DemoConfig) -> FrameLoop<P> {
        FrameLoop {
            platform,
            ball: Ball::new(config.ball_start),
            ball_radius: config.ball_radius,
            background: config.background,
            frames: 0,
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[cfg(test)]
    pub fn into_platform(self) -> P {
        self.platform
    }

    /// One iteration. A close request seen while polling ends it before
    /// anything is updated or drawn.
    pub fn frame(&mut self) -> Result<(), P::Error> {
        let held = self.platform.poll_input();
        if self.platform.should_close() {
            log::debug!("close requested after {} frames", self.frames);
            return Ok(());
        }

        self.frames += 1;
        self.ball.apply(held);
        log::trace!(
            "frame {}: held {:?}, ball at {:?}",
            self.frames,
            held,
            self.ball.position
        );

        self.platform.begin_frame(self.background);
        for command in scene::commands(&self.ball, self.ball_radius).iter() {
            self.platform.draw(command)?;
        }
        self.platform.end_frame();
        Ok(())
    }

    pub fn run(&mut self) -> Result<(), P::Error> {
        while !self.platform.should_close() {
            self.frame()?;
        }
        Ok(())
    }
}
