use crate::ball::Ball;
use backend::{Color, DrawCommand, Vec2};

const TARGET_CENTER: Vec2 = Vec2::new(600.0, 350.0);

/// Draw list of one frame, back to front.
pub fn commands(ball: &Ball, ball_radius: f32) -> [DrawCommand; 5] {
    [
        DrawCommand::Text {
            text: "Hello!",
            x: 100,
            y: 100,
            size: 20,
            color: Color::LIGHTGRAY,
        },
        DrawCommand::Text {
            text: "Prepare",
            x: 100,
            y: 150,
            size: 20,
            color: Color::BLACK,
        },
        DrawCommand::FilledCircle {
            center: TARGET_CENTER,
            radius: 50.0,
            color: Color::RED,
        },
        DrawCommand::CircleOutline {
            center: TARGET_CENTER,
            radius: 150.0,
            color: Color::BLACK,
        },
        DrawCommand::FilledCircle {
            center: ball.position,
            radius: ball_radius,
            color: Color::BLACK,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ball_is_drawn_last() {
        let ball = Ball::new(Vec2::new(12.0, -40.0));
        let cmds = commands(&ball, 25.0);
        assert_eq!(
            cmds[4],
            DrawCommand::FilledCircle {
                center: Vec2::new(12.0, -40.0),
                radius: 25.0,
                color: Color::BLACK,
            }
        );
    }

    #[test]
    fn static_part_does_not_depend_on_ball() {
        let a = commands(&Ball::new(Vec2::new(0.0, 0.0)), 25.0);
        let b = commands(&Ball::new(Vec2::new(900.0, 20.0)), 25.0);
        assert_eq!(a[..4], b[..4]);
    }

    #[test]
    fn labels_come_first() {
        let cmds = commands(&Ball::new(Vec2::default()), 25.0);
        assert!(matches!(cmds[0], DrawCommand::Text { text: "Hello!", x: 100, y: 100, .. }));
        assert!(matches!(cmds[1], DrawCommand::Text { text: "Prepare", x: 100, y: 150, .. }));
        assert!(matches!(cmds[3], DrawCommand::CircleOutline { radius, .. } if radius == 150.0));
    }
}
