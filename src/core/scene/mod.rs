//=========================================================================
// Scene System
//=========================================================================
//
// A scene is one mode/screen of the game: a named, ordered collection
// of game objects plus the load/unload behavior that fills or clears
// it, plus the output surface its objects draw to.
//
// Architecture:
//   Scene
//     ├─ objects: ObjectSet (ordered, owned)
//     ├─ hooks:   Box<dyn SceneHooks>  (game-defined load/unload)
//     └─ surface: Box<dyn RenderSurface>
//
//   SceneRegistry
//     └─ scenes: Vec<Scene> + active index (membership fixed at build)
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::context::EngineContext;
use crate::core::object::{Kind, ObjectSet, Tag};
use crate::core::surface::{NullSurface, RenderSurface};

//=== Module Declarations =================================================

mod registry;
mod transition;

//=== Public API ==========================================================

pub use registry::SceneRegistry;
pub use transition::PendingTransition;

//=== SceneHooks Trait ====================================================

/// Game-defined behavior at scene activation boundaries.
///
/// Both hooks default to no-ops. `on_load` typically fills the object
/// set (spawning the scene's content); `on_unload` typically leaves it
/// alone (objects persist while the scene is inactive) or clears it
/// for scenes that rebuild from scratch each visit.
///
/// Hooks are total: there is no failure path out of a scene change.
///
/// ```rust
/// # use lattice_engine::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum GameKind { Snake }
/// # impl Kind for GameKind {}
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum GameTag { Unit }
/// # impl Tag for GameTag {}
/// struct TitleScreen;
///
/// impl SceneHooks<GameKind, GameTag> for TitleScreen {
///     fn on_load(&mut self, objects: &mut ObjectSet<GameKind, GameTag>,
///                ctx: &mut EngineContext<GameKind, GameTag>) {
///         // spawn the title banner, menu cursor, ...
///     }
/// }
/// ```
pub trait SceneHooks<K: Kind, T: Tag> {
    /// Called when the scene becomes the active scene.
    fn on_load(&mut self, _objects: &mut ObjectSet<K, T>, _ctx: &mut EngineContext<K, T>) {}

    /// Called when the scene stops being the active scene.
    fn on_unload(&mut self, _objects: &mut ObjectSet<K, T>, _ctx: &mut EngineContext<K, T>) {}
}

/// Hooks that do nothing on either boundary.
struct NoHooks;

impl<K: Kind, T: Tag> SceneHooks<K, T> for NoHooks {}

//=== Scene ===============================================================

/// A named, independently loadable collection of game objects.
///
/// Scenes are constructed once, registered with the engine builder, and
/// thereafter activated and deactivated by scene transitions. The
/// `loaded` flag guarantees each hook fires exactly once per
/// activation/deactivation even if lifecycle calls are repeated.
pub struct Scene<K: Kind, T: Tag> {
    name: String,
    objects: ObjectSet<K, T>,
    hooks: Box<dyn SceneHooks<K, T>>,
    surface: Box<dyn RenderSurface>,
    loaded: bool,
}

impl<K: Kind, T: Tag> Scene<K, T> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty scene with no-op hooks and a discarding surface.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: ObjectSet::new(),
            hooks: Box::new(NoHooks),
            surface: Box::new(NullSurface),
            loaded: false,
        }
    }

    /// Replaces the scene's load/unload behavior.
    pub fn with_hooks(mut self, hooks: Box<dyn SceneHooks<K, T>>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Replaces the scene's output surface.
    pub fn with_surface(mut self, surface: Box<dyn RenderSurface>) -> Self {
        self.surface = surface;
        self
    }

    //--- Identity & Collection --------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn objects(&self) -> &ObjectSet<K, T> {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut ObjectSet<K, T> {
        &mut self.objects
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    //--- Lifecycle --------------------------------------------------------

    /// Runs the load hook. Idempotent per activation: a second call
    /// before `unload` is a logged no-op.
    pub(crate) fn load(&mut self, ctx: &mut EngineContext<K, T>) {
        if self.loaded {
            warn!("Scene '{}' is already loaded, skipping load", self.name);
            return;
        }

        debug!("Loading scene '{}'", self.name);
        self.hooks.on_load(&mut self.objects, ctx);
        self.loaded = true;
    }

    /// Runs the unload hook. A call on an unloaded scene is a no-op.
    pub(crate) fn unload(&mut self, ctx: &mut EngineContext<K, T>) {
        if !self.loaded {
            return;
        }

        debug!("Unloading scene '{}'", self.name);
        self.hooks.on_unload(&mut self.objects, ctx);
        self.loaded = false;
    }

    //--- Output Bracket ---------------------------------------------------

    pub(crate) fn clear_surface(&mut self) {
        self.surface.clear();
    }

    pub(crate) fn present_surface(&mut self) {
        self.surface.present();
    }

    /// Draws the object at `index` onto this scene's surface.
    pub(crate) fn draw_object(&mut self, index: usize) {
        if let Some(object) = self.objects.get(index) {
            object.draw(self.surface.as_mut());
        }
    }
}

//=== Tests ===============================================================
