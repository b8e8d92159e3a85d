//=========================================================================
// Lattice Engine — Library Root
//
// This crate defines the public API surface of the Lattice Engine: a
// single-threaded, fixed-rate runtime for turn-paced grid games.
//
// Responsibilities:
// - Expose the engine entry point (`Engine` / `EngineBuilder`)
// - Expose the core systems games build on (scenes, objects, context)
// - Keep the crate free of platform concerns: rendering, input capture
//   and audio are consumed as traits, implemented by the embedder
//
// Typical usage:
// ```no_run
// use lattice_engine::prelude::*;
//
// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// enum GameKind { Banner }
// impl Kind for GameKind {}
//
// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// enum GameTag { Ui }
// impl Tag for GameTag {}
//
// EngineBuilder::<GameKind, GameTag>::new()
//     .add_scene(Scene::new("titleScreen"))
//     .build()
//     .run();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the engine's systems and contracts (objects, scenes,
// context, consumed interfaces). It is exposed publicly; application
// code will mostly go through the prelude.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `engine` defines the main engine entry point and the tick loop.
//
mod engine;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the engine entry points so users can simply
// `use lattice_engine::{Engine, EngineBuilder};` without knowing the
// internal module structure.
//
pub use engine::{Engine, EngineBuilder, GameState, TickControl};
