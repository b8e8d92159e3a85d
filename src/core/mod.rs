//=========================================================================
// Core Systems
//=========================================================================
//
// Everything the engine loop drives: the object contract and storage,
// the scene system, the per-tick context handed to game code, and the
// consumed interfaces for input, output, and audio.
//
// Architecture:
//   Engine (src/engine.rs)
//     ├─ SceneRegistry ── Scene ── ObjectSet ── dyn GameObject
//     ├─ EngineContext  (queries + deferred commands, given to objects)
//     └─ InputRouter ── dyn InputSource
//
//=========================================================================

//=== Module Declarations =================================================

pub mod audio;
pub mod context;
pub mod input;
pub mod object;
pub mod scene;
pub mod surface;

//=== Public API ==========================================================

pub use audio::{Audio, NullAudio};
pub use context::EngineContext;
pub use input::{ChannelSource, InputRouter, InputSource, NullSource};
pub use object::{Cell, GameObject, Kind, ObjectInfo, ObjectSet, Tag};
pub use scene::{PendingTransition, Scene, SceneHooks, SceneRegistry};
pub use surface::{NullSurface, RenderSurface};
