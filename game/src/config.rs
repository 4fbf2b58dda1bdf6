use backend::{Color, Vec2, WindowConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub background: Color,
    pub ball_start: Vec2,
    pub ball_radius: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            window: WindowConfig {
                title: "Hello".to_string(),
                width: 1200,
                height: 700,
                target_fps: 60,
                vsync: true,
            },
            background: Color::RAYWHITE,
            ball_start: Vec2::new(1000.0, 100.0),
            ball_radius: 25.0,
        }
    }
}
