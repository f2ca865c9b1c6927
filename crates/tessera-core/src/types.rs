//! Component value types shared by scenes and tests

use glam::Vec3;

/// Hit points of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Health {
    pub value: i32,
}

impl Health {
    /// Placeholder for "no meaningful health", distinct from a real value of zero.
    pub const INVALID: Health = Health { value: -1 };

    pub fn new(value: i32) -> Self {
        Self { value }
    }

    pub fn is_valid(&self) -> bool {
        self.value >= 0
    }

    /// Whether the entity has run out of health.
    pub fn is_depleted(&self) -> bool {
        self.value == 0
    }

    /// Apply damage, clamping at zero. Invalid health is left untouched.
    pub fn damage(&mut self, amount: i32) {
        if self.is_valid() {
            self.value = (self.value - amount).max(0);
        }
    }
}

/// World-space location of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec3);

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Move by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        self.0 += offset;
    }

    pub fn distance(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_health_is_distinct_from_zero() {
        assert!(!Health::INVALID.is_valid());
        assert!(Health::default().is_valid());
        assert_ne!(Health::INVALID, Health::new(0));
    }

    #[test]
    fn damage_clamps_at_zero() {
        let mut health = Health::new(25);
        health.damage(10);
        assert_eq!(health.value, 15);
        health.damage(100);
        assert!(health.is_depleted());

        let mut invalid = Health::INVALID;
        invalid.damage(5);
        assert_eq!(invalid, Health::INVALID);
    }

    #[test]
    fn position_translate_and_distance() {
        let mut pos = Position::new(5.0, 20.0, 4.0);
        pos.translate(Vec3::new(-5.0, -20.0, -4.0));
        assert_eq!(pos, Position::default());
        assert_eq!(pos.distance(&Position::new(3.0, 4.0, 0.0)), 5.0);
    }
}
