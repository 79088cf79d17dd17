//! Scene entities
//!
//! Everything that moves besides the ship: bullets, drifting icon targets,
//! and explosion particles. Entities are transient. The engine creates them
//! during the spawn and fire steps of a tick and drops them on boundary
//! exit, life expiry, or collision, always within the same update pass.

use crate::assets::SpriteHandle;
use crate::foundation::math::{Aabb, Vec2};
use crate::render::Color;

/// Which cannon fired a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cannon {
    /// Nose cannon, fires on every cooldown expiry
    Center,

    /// Wing cannons, fire occasionally as a symmetric pair
    Side,
}

/// Entity behavior tag with per-kind data
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    /// Upward projectile, removed once it passes the top edge
    Bullet {
        /// Which cannon fired it
        cannon: Cannon,
    },

    /// Drifting icon the bullets can destroy
    Target {
        /// Technology name the icon stands for
        label: String,

        /// Sprite to draw, when one was registered for the style
        sprite: Option<SpriteHandle>,
    },

    /// Explosion debris fading out
    Particle {
        /// Remaining life in `[0, 1]`; drawn with matching alpha
        life: f32,
    },
}

/// A single moving, drawable object in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Center position on the surface
    pub position: Vec2,

    /// Velocity in pixels per second
    pub velocity: Vec2,

    /// Bounding-box extents used for collision and drawing
    pub size: Vec2,

    /// Fill color; particles modulate its alpha by remaining life
    pub color: Color,

    /// Behavior tag
    pub kind: EntityKind,
}

impl Entity {
    /// Bounding box at the current position
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }

    /// Bounding box scaled around the entity center, used for halo passes
    pub fn aabb_scaled(&self, factor: f32) -> Aabb {
        Aabb::new(self.position, self.size * factor)
    }

    /// Whether this entity is a bullet
    pub fn is_bullet(&self) -> bool {
        matches!(self.kind, EntityKind::Bullet { .. })
    }

    /// Whether this entity is a target
    pub fn is_target(&self) -> bool {
        matches!(self.kind, EntityKind::Target { .. })
    }

    /// Whether this entity is a particle
    pub fn is_particle(&self) -> bool {
        matches!(self.kind, EntityKind::Particle { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_follows_position() {
        let e = Entity {
            position: Vec2::new(10.0, 20.0),
            velocity: Vec2::new(0.0, 0.0),
            size: Vec2::new(4.0, 8.0),
            color: Color::WHITE,
            kind: EntityKind::Bullet {
                cannon: Cannon::Center,
            },
        };
        let b = e.aabb();
        assert_eq!(b.min(), Vec2::new(8.0, 16.0));
        assert_eq!(b.max(), Vec2::new(12.0, 24.0));
    }

    #[test]
    fn test_kind_predicates() {
        let e = Entity {
            position: Vec2::new(0.0, 0.0),
            velocity: Vec2::new(0.0, 0.0),
            size: Vec2::new(1.0, 1.0),
            color: Color::WHITE,
            kind: EntityKind::Particle { life: 1.0 },
        };
        assert!(e.is_particle());
        assert!(!e.is_bullet());
        assert!(!e.is_target());
    }
}
