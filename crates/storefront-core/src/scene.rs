//! Scene membership: which visuals are attached to the renderable scene.
//!
//! Visuals are referred to by a stable [`VisualId`]. Attaching an attached
//! visual, or detaching a detached one, is a no-op.

use fnv::FnvHashSet;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualId(pub u32);

/// The subset of a renderable object the carousel needs.
pub trait Visual {
    fn id(&self) -> VisualId;
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    /// Move along the object's local x axis.
    fn translate_x(&mut self, dx: f32);
}

pub trait SceneMembership {
    fn add(&mut self, id: VisualId);
    fn remove(&mut self, id: VisualId);
    fn contains(&self, id: VisualId) -> bool;
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    attached: FnvHashSet<VisualId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    pub fn clear(&mut self) {
        self.attached.clear();
    }

    /// Attached ids in ascending order.
    pub fn attached_ids(&self) -> Vec<VisualId> {
        let mut ids: Vec<VisualId> = self.attached.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl SceneMembership for Scene {
    fn add(&mut self, id: VisualId) {
        if self.attached.insert(id) {
            log::trace!("[scene] attach {:?}", id);
        }
    }

    fn remove(&mut self, id: VisualId) {
        if self.attached.remove(&id) {
            log::trace!("[scene] detach {:?}", id);
        }
    }

    fn contains(&self, id: VisualId) -> bool {
        self.attached.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove_are_idempotent() {
        let mut scene = Scene::new();
        scene.add(VisualId(3));
        scene.add(VisualId(3));
        assert_eq!(scene.len(), 1);
        scene.remove(VisualId(3));
        scene.remove(VisualId(3));
        assert!(scene.is_empty());
    }

    #[test]
    fn attached_ids_are_sorted() {
        let mut scene = Scene::new();
        for i in [4, 1, 3] {
            scene.add(VisualId(i));
        }
        assert_eq!(
            scene.attached_ids(),
            vec![VisualId(1), VisualId(3), VisualId(4)]
        );
    }
}
