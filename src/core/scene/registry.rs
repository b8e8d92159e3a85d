//=========================================================================
// Scene Registry
//=========================================================================
//
// Ordered storage for every scene the game registered, plus the index
// of the one currently active.
//
// Membership is fixed when the registry is built; transitions only ever
// move the active index. The active index is always in bounds: the
// registry refuses to exist without at least one scene, and the engine
// validates every target before switching.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::object::{Kind, Tag};
use super::Scene;

//=== Scene Registry ======================================================

/// Ordered, immutable-membership collection of scenes.
pub struct SceneRegistry<K: Kind, T: Tag> {
    scenes: Vec<Scene<K, T>>,
    active: usize,
}

impl<K: Kind, T: Tag> SceneRegistry<K, T> {
    //--- Construction -----------------------------------------------------

    /// Builds a registry with the first scene active.
    ///
    /// # Panics
    ///
    /// Panics if `scenes` is empty; an engine with no scene has nothing
    /// to run.
    pub fn new(scenes: Vec<Scene<K, T>>) -> Self {
        assert!(!scenes.is_empty(), "At least one scene must be registered");

        Self { scenes, active: 0 }
    }

    //--- Lookup -----------------------------------------------------------

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// The registered scene names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.scenes
            .iter()
            .map(|scene| scene.name().to_string())
            .collect()
    }

    /// Index of the first scene with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.scenes.iter().position(|scene| scene.name() == name)
    }

    //--- Active Scene -----------------------------------------------------

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Scene<K, T> {
        &self.scenes[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Scene<K, T> {
        &mut self.scenes[self.active]
    }

    /// Moves the active index. Callers validate `index` first; the
    /// registry guards its own invariant regardless.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub(crate) fn set_active(&mut self, index: usize) {
        assert!(index < self.scenes.len(), "Active scene index out of bounds");

        self.active = index;
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestKind {
        Thing,
    }
    impl Kind for TestKind {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestTag {
        Plain,
    }
    impl Tag for TestTag {}

    fn registry(names: &[&str]) -> SceneRegistry<TestKind, TestTag> {
        SceneRegistry::new(names.iter().map(|name| Scene::new(*name)).collect())
    }

    #[test]
    fn first_scene_starts_active() {
        let registry = registry(&["title", "game"]);
        assert_eq!(registry.active_index(), 0);
        assert_eq!(registry.active().name(), "title");
    }

    #[test]
    fn find_by_name_returns_first_match() {
        let registry = registry(&["title", "game", "game"]);
        assert_eq!(registry.find_by_name("game"), Some(1));
        assert_eq!(registry.find_by_name("options"), None);
    }

    #[test]
    fn set_active_moves_the_index() {
        let mut registry = registry(&["title", "game"]);
        registry.set_active(1);
        assert_eq!(registry.active().name(), "game");
    }

    #[test]
    #[should_panic(expected = "At least one scene")]
    fn empty_registry_is_rejected() {
        let _ = registry(&[]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_active_rejects_out_of_range() {
        let mut registry = registry(&["title"]);
        registry.set_active(3);
    }
}
