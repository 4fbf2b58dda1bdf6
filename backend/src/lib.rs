pub mod draw;
pub mod error;
pub mod glutils;
pub mod input;
pub mod math;
pub mod platform;
pub mod renderer;
pub mod shaders;
pub mod system;
pub mod tessellate;

pub use draw::{Color, DrawCommand};
pub use error::BackendError;
pub use input::{HeldKeys, Key};
pub use math::Vec2;
pub use platform::Platform;
pub use system::{System, WindowConfig};
