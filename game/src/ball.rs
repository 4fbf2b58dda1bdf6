use backend::{HeldKeys, Key, Vec2};

/// The circle steered with the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: Vec2,
}

impl Ball {
    /// Pixels per frame per held key, on each axis.
    pub const STEP: f32 = 2.0;

    pub fn new(position: Vec2) -> Ball {
        Ball { position }
    }

    /// Every held key contributes its delta; opposite keys cancel out and
    /// diagonals are not normalized. No clamping to the window.
    pub fn apply(&mut self, held: HeldKeys) {
        for key in Key::ALL {
            if held.is_held(key) {
                self.position = self.position + Self::delta(key);
            }
        }
    }

    fn delta(key: Key) -> Vec2 {
        match key {
            Key::Right => Vec2::new(Self::STEP, 0.0),
            Key::Left => Vec2::new(-Self::STEP, 0.0),
            Key::Up => Vec2::new(0.0, -Self::STEP),
            Key::Down => Vec2::new(0.0, Self::STEP),
        }
    }
}
