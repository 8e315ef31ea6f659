//! Circle-circle collision
//!
//! Every sprite is a circle of radius `width / 2`. The playfield only ever
//! holds a few dozen sprites, so every check is a brute-force scan.

use glam::Vec2;

use super::group::{EntityId, Group};
use super::sprite::Sprite;

/// Anything that occupies a circle on the field
pub trait Collidable {
    fn position(&self) -> Vec2;
    fn radius(&self) -> f32;
}

impl Collidable for Sprite {
    #[inline]
    fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    fn radius(&self) -> f32 {
        Sprite::radius(self)
    }
}

/// True when the two circles touch or overlap
#[inline]
pub fn collide<A, B>(a: &A, b: &B) -> bool
where
    A: Collidable + ?Sized,
    B: Collidable + ?Sized,
{
    a.position().distance(b.position()) <= a.radius() + b.radius()
}

/// First member of `group` (in id order) that collides with `entity`
pub fn collide_group<E, T>(entity: &E, group: &Group<T>) -> Option<EntityId>
where
    E: Collidable + ?Sized,
    T: Collidable,
{
    group
        .iter()
        .find(|(_, member)| collide(entity, *member))
        .map(|(id, _)| id)
}
