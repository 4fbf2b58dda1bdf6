mod ball;
mod config;
mod frame_loop;
mod scene;

use anyhow::Context;
use backend::system::System;
use config::DemoConfig;
use frame_loop::FrameLoop;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DemoConfig::default();
    let system = System::new(&config.window).context("Game initialization failure")?;

    let mut looper = FrameLoop::new(system, &config);
    looper.run()?;
    log::info!(
        "window closed after {} frames, ball at {:?}",
        looper.frames(),
        looper.ball().position
    );
    Ok(())
}
