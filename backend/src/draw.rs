use super::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RAYWHITE: Color = Color::rgb(245, 245, 245);
    pub const LIGHTGRAY: Color = Color::rgb(200, 200, 200);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(230, 41, 55);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub fn to_f32_rgba(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }
}

/// One primitive of a draw batch, in window pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    // top-left corner of the text box
    Text {
        text: &'static str,
        x: i32,
        y: i32,
        size: i32,
        color: Color,
    },
    FilledCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    CircleOutline {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_normalizes_to_unit_range() {
        assert_eq!(Color::BLACK.to_f32_rgba(), [0.0, 0.0, 0.0, 1.0]);
        let [r, g, b, a] = Color::RAYWHITE.to_f32_rgba();
        assert!(r > 0.95 && r < 0.97);
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(a, 1.0);
    }
}
