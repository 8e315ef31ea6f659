//! Owning, optionally bounded collections of sprites
//!
//! A group is the only owner of its members; removing a member is the only
//! way a sprite is destroyed. Members are keyed by an id that is unique
//! within the group, and iteration follows id order so a run replays the
//! same way given the same seed.

use serde::{Deserialize, Serialize};

/// Identity of a member within its group
pub type EntityId = u32;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group<T> {
    members: Vec<(EntityId, T)>,
    max_count: Option<usize>,
    next_id: EntityId,
}

impl<T> Default for Group<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> Group<T> {
    pub fn unbounded() -> Self {
        Self {
            members: Vec::new(),
            max_count: None,
            next_id: 1,
        }
    }

    pub fn bounded(max_count: usize) -> Self {
        Self {
            members: Vec::with_capacity(max_count),
            max_count: Some(max_count),
            next_id: 1,
        }
    }

    pub fn with_capacity(max_count: Option<usize>) -> Self {
        match max_count {
            Some(max) => Self::bounded(max),
            None => Self::unbounded(),
        }
    }

    pub fn max_count(&self) -> Option<usize> {
        self.max_count
    }

    pub fn is_full(&self) -> bool {
        self.max_count.is_some_and(|max| self.members.len() >= max)
    }

    /// Insert a member, returning its id. Once the group is full the member
    /// is dropped and `None` is returned; callers are free to ignore it.
    pub fn add(&mut self, member: T) -> Option<EntityId> {
        if self.is_full() {
            return None;
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.members.push((id, member));
        Some(id)
    }

    /// Remove by identity. Removing a non-member is a no-op.
    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        let idx = self.members.iter().position(|(member_id, _)| *member_id == id)?;
        Some(self.members.remove(idx).1)
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn exists(&self) -> bool {
        !self.members.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.members
            .iter()
            .find(|(member_id, _)| *member_id == id)
            .map(|(_, member)| member)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.members
            .iter_mut()
            .find(|(member_id, _)| *member_id == id)
            .map(|(_, member)| member)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.members.iter().map(|(id, member)| (*id, member))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut T)> {
        self.members.iter_mut().map(|(id, member)| (*id, member))
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.members.iter().map(|(id, _)| *id).collect()
    }

    /// Keep only members matching the predicate, returning how many were dropped
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.members.len();
        self.members.retain(|(_, member)| keep(member));
        before - self.members.len()
    }
}
