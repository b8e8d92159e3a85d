//=========================================================================
// Game Objects
//=========================================================================
//
// The polymorphic unit of simulated state and its storage.
//
// Objects are owned by exactly one scene's ObjectSet as boxed trait
// objects. Peers are never handed out as references during a pass;
// they are visible as copyable ObjectInfo snapshots instead, which is
// what allows an object to hold `&mut self` while reading the rest of
// the scene.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Internal Dependencies ===============================================

use crate::core::context::EngineContext;
use crate::core::surface::RenderSurface;

//=== Marker Traits =======================================================

/// Marker trait for an object's concrete kind.
///
/// Kinds are the closed enumeration a game filters on (snake, food,
/// scoreboard, ...). Filtering on a kind value replaces runtime type
/// inspection entirely.
pub trait Kind: Clone + Copy + Eq + Hash + Debug + 'static {}

/// Marker trait for an object's semantic tag.
///
/// Tags are coarser labels than kinds (e.g. "hazard", "ui") and are
/// chosen freely by the game. An object has exactly one of each.
pub trait Tag: Clone + Copy + Eq + Hash + Debug + 'static {}

//=== Cell ================================================================

/// An integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

//=== GameObject Trait ====================================================

/// Behavior contract for everything that lives in a scene.
///
/// Only the identity accessors and `update` are required; the lifecycle
/// and collision hooks default to no-ops, matching objects that never
/// collide or need per-activation setup.
///
/// # Contract
///
/// - `update` advances this object's own state by one tick. Interaction
///   with peers happens only through [`EngineContext`] queries.
/// - `draw` emits the object's visual representation and takes `&self`:
///   drawing cannot mutate simulation state.
/// - `on_collision` reacts to sharing a cell with `other`. It may mark
///   `self` destroyed, move `self`, or ignore the event. It never
///   mutates the other object.
/// - `on_start` runs once per object immediately after its scene becomes
///   the active scene, for per-activation setup distinct from
///   construction.
/// - Once `is_destroyed` reports true, the engine never calls `update`
///   or `draw` on the object again; it is removed at the next sweep.
pub trait GameObject<K: Kind, T: Tag> {
    fn kind(&self) -> K;

    fn tag(&self) -> T;

    /// The grid cell this object currently occupies.
    fn cell(&self) -> Cell;

    /// Liveness flag observed by the per-tick sweep.
    fn is_destroyed(&self) -> bool;

    /// Per-activation setup hook.
    fn on_start(&mut self, _ctx: &mut EngineContext<K, T>) {}

    /// Advances this object's own state by one tick.
    fn update(&mut self, ctx: &mut EngineContext<K, T>);

    /// Emits this object's visual representation.
    fn draw(&self, surface: &mut dyn RenderSurface);

    /// Reacts to occupying the same cell as `other`.
    fn on_collision(&mut self, _other: &ObjectInfo<K, T>, _ctx: &mut EngineContext<K, T>) {}
}

//=== ObjectInfo ==========================================================

/// Copyable snapshot of one object's identity and committed state.
///
/// This is the unit the query surface returns and the `other` argument
/// of [`GameObject::on_collision`]. Values are captured at a pass
/// boundary; they do not track mutation within the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectInfo<K: Kind, T: Tag> {
    pub kind: K,
    pub tag: T,
    pub cell: Cell,
    pub destroyed: bool,
}

impl<K: Kind, T: Tag> ObjectInfo<K, T> {
    /// Captures the current facts of `object`.
    pub fn of(object: &dyn GameObject<K, T>) -> Self {
        Self {
            kind: object.kind(),
            tag: object.tag(),
            cell: object.cell(),
            destroyed: object.is_destroyed(),
        }
    }
}

//=== ObjectSet ===========================================================

/// Ordered collection of the objects owned by one scene.
///
/// Insertion order is preserved across every operation, including the
/// destruction sweep. Iteration order is deterministic, which tests
/// and replays rely on even though correctness does not.
pub struct ObjectSet<K: Kind, T: Tag> {
    objects: Vec<Box<dyn GameObject<K, T>>>,
}

impl<K: Kind, T: Tag> ObjectSet<K, T> {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Appends an object to the end of the collection.
    pub fn add(&mut self, object: Box<dyn GameObject<K, T>>) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn GameObject<K, T>> {
        self.objects.get(index).map(|object| object.as_ref())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn GameObject<K, T> + 'static)> {
        self.objects.get_mut(index).map(|object| object.as_mut())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn GameObject<K, T>> {
        self.objects.iter().map(|object| object.as_ref())
    }

    /// Removes every object whose destroyed flag is set.
    ///
    /// Survivors keep their relative order.
    pub fn remove_destroyed(&mut self) {
        self.objects.retain(|object| !object.is_destroyed());
    }

    /// Removes every object. Scene unload hooks use this when a scene
    /// does not want its contents to persist across deactivation.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Captures the facts of every object, in collection order.
    pub fn snapshot(&self) -> Vec<ObjectInfo<K, T>> {
        self.objects
            .iter()
            .map(|object| ObjectInfo::of(object.as_ref()))
            .collect()
    }
}

impl<K: Kind, T: Tag> Default for ObjectSet<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestKind {
        Marker,
    }
    impl Kind for TestKind {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestTag {
        Plain,
    }
    impl Tag for TestTag {}

    struct Marker {
        cell: Cell,
        destroyed: bool,
    }

    impl Marker {
        fn boxed(x: i32, y: i32) -> Box<dyn GameObject<TestKind, TestTag>> {
            Box::new(Self {
                cell: Cell::new(x, y),
                destroyed: false,
            })
        }

        fn boxed_destroyed(x: i32, y: i32) -> Box<dyn GameObject<TestKind, TestTag>> {
            Box::new(Self {
                cell: Cell::new(x, y),
                destroyed: true,
            })
        }
    }

    impl GameObject<TestKind, TestTag> for Marker {
        fn kind(&self) -> TestKind {
            TestKind::Marker
        }

        fn tag(&self) -> TestTag {
            TestTag::Plain
        }

        fn cell(&self) -> Cell {
            self.cell
        }

        fn is_destroyed(&self) -> bool {
            self.destroyed
        }

        fn update(&mut self, _ctx: &mut EngineContext<TestKind, TestTag>) {}

        fn draw(&self, _surface: &mut dyn RenderSurface) {}
    }

    fn labels(set: &ObjectSet<TestKind, TestTag>) -> Vec<i32> {
        set.iter().map(|object| object.cell().x).collect()
    }

    #[test]
    fn cell_equality_is_by_coordinates() {
        assert_eq!(Cell::new(3, 4), Cell::new(3, 4));
        assert_ne!(Cell::new(3, 4), Cell::new(4, 3));
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut set = ObjectSet::new();
        set.add(Marker::boxed(1, 0));
        set.add(Marker::boxed(2, 0));
        set.add(Marker::boxed(3, 0));

        assert_eq!(set.len(), 3);
        assert_eq!(labels(&set), vec![1, 2, 3]);
    }

    #[test]
    fn remove_destroyed_keeps_survivor_order() {
        let mut set = ObjectSet::new();
        set.add(Marker::boxed(1, 0));
        set.add(Marker::boxed_destroyed(2, 0));
        set.add(Marker::boxed(3, 0));
        set.add(Marker::boxed_destroyed(4, 0));
        set.add(Marker::boxed(5, 0));

        set.remove_destroyed();

        assert_eq!(labels(&set), vec![1, 3, 5]);
    }

    #[test]
    fn remove_destroyed_on_clean_set_is_a_no_op() {
        let mut set = ObjectSet::new();
        set.add(Marker::boxed(1, 0));
        set.remove_destroyed();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn snapshot_captures_facts_in_order() {
        let mut set = ObjectSet::new();
        set.add(Marker::boxed(1, 9));
        set.add(Marker::boxed_destroyed(2, 9));

        let snapshot = set.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].cell, Cell::new(1, 9));
        assert!(!snapshot[0].destroyed);
        assert_eq!(snapshot[1].cell, Cell::new(2, 9));
        assert!(snapshot[1].destroyed);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = ObjectSet::new();
        set.add(Marker::boxed(1, 0));
        set.add(Marker::boxed(2, 0));
        set.clear();
        assert!(set.is_empty());
    }
}
