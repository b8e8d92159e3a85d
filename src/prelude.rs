//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use lattice_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder, GameState, TickControl};

// Objects
pub use crate::core::object::{Cell, GameObject, Kind, ObjectInfo, ObjectSet, Tag};

// Scene system
pub use crate::core::scene::{Scene, SceneHooks, SceneRegistry};

// Context (query surface)
pub use crate::core::context::EngineContext;

// Consumed interfaces
pub use crate::core::audio::{Audio, NullAudio};
pub use crate::core::input::{ChannelSource, InputRouter, InputSource, NullSource};
pub use crate::core::surface::{NullSurface, RenderSurface};
