use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("SDL initialization failure: {0}")]
    Sdl(String),
    #[error("error while building OpenGL window: {0}")]
    Window(String),
    #[error("OpenGL context error: {0}")]
    GlContext(String),
    #[error("shader error: {0}")]
    Shader(String),
    #[error("text rasterization error: {0}")]
    Text(String),
}
