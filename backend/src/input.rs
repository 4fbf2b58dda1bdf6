/// Directional keys polled every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Right,
    Left,
    Up,
    Down,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::Right, Key::Left, Key::Up, Key::Down];

    fn bit(self) -> u8 {
        match self {
            Key::Right => 0b0001,
            Key::Left => 0b0010,
            Key::Up => 0b0100,
            Key::Down => 0b1000,
        }
    }
}

/// Snapshot of the directional keys held down at poll time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeldKeys(u8);

impl HeldKeys {
    pub fn empty() -> HeldKeys {
        HeldKeys(0)
    }

    pub fn with(mut self, key: Key) -> HeldKeys {
        self.insert(key);
        self
    }

    pub fn insert(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Key> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut held = HeldKeys::empty();
        for key in iter {
            held.insert(key);
        }
        held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_holds_nothing() {
        let held = HeldKeys::default();
        assert!(held.is_empty());
        assert!(Key::ALL.iter().all(|k| !held.is_held(*k)));
    }

    #[test]
    fn keys_are_independent() {
        let held = HeldKeys::empty().with(Key::Right).with(Key::Up);
        assert!(held.is_held(Key::Right));
        assert!(held.is_held(Key::Up));
        assert!(!held.is_held(Key::Left));
        assert!(!held.is_held(Key::Down));
    }

    #[test]
    fn collect_matches_with() {
        let collected: HeldKeys = [Key::Down, Key::Left, Key::Down].into_iter().collect();
        assert_eq!(collected, HeldKeys::empty().with(Key::Left).with(Key::Down));
    }
}
