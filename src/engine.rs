//=========================================================================
// Lattice Engine
//
// Main entry point and per-tick coordinator.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [fixed-rate loop]
//         │                          │
//         ├─ add_scene()             └─ tick(): transition → clear →
//         ├─ with_frame_interval()      poll → update/draw → collision
//         └─ with_quit_key()            → sweep → present
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::Duration;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::audio::{Audio, NullAudio};
use crate::core::context::EngineContext;
use crate::core::input::{InputRouter, InputSource, NullSource};
use crate::core::object::{Kind, Tag};
use crate::core::scene::{Scene, SceneRegistry};

//=== GameState ===========================================================

/// Coarse lifecycle of the whole engine.
///
/// Linear: `Begin` performs one-time setup, `Main` runs the tick loop,
/// `End` is terminal. There is deliberately no path back out of `End`;
/// a game that wants a "play again" flow keeps it inside its scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Begin,
    Main,
    End,
}

//=== TickControl =========================================================

/// Control flow signal returned by each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Frame interval**: 100 ms of sleep per tick
/// - **Quit key**: `'q'`
/// - **Players**: 1
/// - **Input**: [`NullSource`] (no input device)
/// - **Audio**: [`NullAudio`] (no audio subsystem)
///
/// # Examples
///
/// ```no_run
/// use lattice_engine::prelude::*;
/// use std::time::Duration;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameKind { Banner }
/// impl Kind for GameKind {}
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameTag { Ui }
/// impl Tag for GameTag {}
///
/// EngineBuilder::<GameKind, GameTag>::new()
///     .add_scene(Scene::new("titleScreen"))
///     .add_scene(Scene::new("gameScene"))
///     .with_frame_interval(Duration::from_millis(120))
///     .with_players(2)
///     .build()
///     .run();
/// ```
pub struct EngineBuilder<K: Kind, T: Tag> {
    scenes: Vec<Scene<K, T>>,
    frame_interval: Duration,
    quit_key: char,
    players: u32,
    input: Box<dyn InputSource>,
    audio: Box<dyn Audio>,
}

impl<K: Kind, T: Tag> EngineBuilder<K, T> {
    /// Creates a new builder with default settings and no scenes.
    pub fn new() -> Self {
        Self {
            scenes: Vec::new(),
            frame_interval: Duration::from_millis(100),
            quit_key: 'q',
            players: 1,
            input: Box::new(NullSource),
            audio: Box::new(NullAudio),
        }
    }

    /// Registers a scene. Registration order is transition-index order,
    /// and the first scene registered is the initial active scene.
    /// Membership is immutable once the engine is built.
    pub fn add_scene(mut self, scene: Scene<K, T>) -> Self {
        self.scenes.push(scene);
        self
    }

    /// Sets the sleep duration appended to every tick.
    ///
    /// This is a fixed pacing sleep, not a delta-time target: the loop
    /// always sleeps the full interval regardless of how long the tick
    /// took.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Frame interval must be positive");
        self.frame_interval = interval;
        self
    }

    /// Sets the input symbol that ends the loop.
    pub fn with_quit_key(mut self, key: char) -> Self {
        self.quit_key = key;
        self
    }

    /// Sets the player count exposed to game code via
    /// [`EngineContext::player_count`].
    pub fn with_players(mut self, players: u32) -> Self {
        self.players = players;
        self
    }

    /// Sets the input source the router polls each tick.
    pub fn with_input(mut self, input: Box<dyn InputSource>) -> Self {
        self.input = input;
        self
    }

    /// Sets the audio capability reachable through the context.
    pub fn with_audio(mut self, audio: Box<dyn Audio>) -> Self {
        self.audio = audio;
        self
    }

    /// Builds the engine instance.
    ///
    /// # Panics
    ///
    /// Panics if no scene was registered.
    pub fn build(self) -> Engine<K, T> {
        assert!(
            !self.scenes.is_empty(),
            "At least one scene must be registered"
        );

        info!(
            "Building engine ({} scenes, frame interval {:?})",
            self.scenes.len(),
            self.frame_interval
        );

        let registry = SceneRegistry::new(self.scenes);
        let context = EngineContext::new(registry.names(), self.players, self.audio);

        Engine {
            registry,
            context,
            router: InputRouter::new(self.input),
            state: GameState::Begin,
            frame_interval: self.frame_interval,
            quit_key: self.quit_key,
        }
    }
}

impl<K: Kind, T: Tag> Default for EngineBuilder<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// The fixed-rate runtime driving scenes and their objects.
///
/// One instance drives the whole game: it owns every registered scene,
/// applies deferred scene transitions at tick boundaries, dispatches
/// update/draw to the active scene's objects in collection order, runs
/// the pairwise collision pass, and sweeps destroyed objects, all on
/// the calling thread at a fixed sleep interval.
///
/// [`Engine::run`] consumes the engine and blocks until the quit key is
/// pressed or quit is requested; embedders with their own loop can call
/// [`Engine::tick`] directly and pace it themselves.
pub struct Engine<K: Kind, T: Tag> {
    registry: SceneRegistry<K, T>,
    context: EngineContext<K, T>,
    router: InputRouter,
    state: GameState,
    frame_interval: Duration,
    quit_key: char,
}

impl<K: Kind, T: Tag> Engine<K, T> {
    //--- Observability ----------------------------------------------------

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn active_scene(&self) -> &Scene<K, T> {
        self.registry.active()
    }

    //--- Execution --------------------------------------------------------

    /// Runs the loop until exit, sleeping the frame interval per tick.
    pub fn run(mut self) {
        info!("Engine running (frame interval {:?})", self.frame_interval);

        while let TickControl::Continue = self.tick() {
            thread::sleep(self.frame_interval);
        }

        info!("Engine shutdown complete");
    }

    /// Advances the engine by exactly one frame, without pacing.
    ///
    /// The first call performs the one-time `Begin` setup (loads the
    /// initial scene and starts its objects) before running the frame.
    /// Once the engine has reached [`GameState::End`], every further
    /// call returns [`TickControl::Exit`] without doing work.
    ///
    /// Per-frame order: apply pending scene transition, clear the active
    /// surface, poll input once, update+draw each object in collection
    /// order, collision pass, sweep destroyed objects and commit spawns,
    /// present the surface. The quit condition is evaluated last, so the
    /// quitting tick always completes its passes.
    pub fn tick(&mut self) -> TickControl {
        match self.state {
            GameState::Begin => self.begin(),
            GameState::Main => {}
            GameState::End => return TickControl::Exit,
        }

        self.apply_pending_transition();

        self.registry.active_mut().clear_surface();

        self.router.check_input();
        self.context.set_input(self.router.input());

        self.refresh_snapshot();
        self.update_and_draw();
        self.collision_pass();
        self.sweep_and_commit();

        self.registry.active_mut().present_surface();

        if self.context.quit_requested() || self.context.input() == Some(self.quit_key) {
            self.finish();
            return TickControl::Exit;
        }

        TickControl::Continue
    }

    //--- State Transitions ------------------------------------------------

    /// One-time setup: activate the initial scene, enter the main loop.
    fn begin(&mut self) {
        info!(
            "Engine starting: {} scene(s), {} player(s)",
            self.registry.len(),
            self.context.player_count()
        );

        self.activate_current_scene();
        self.state = GameState::Main;
    }

    /// Shutdown: deactivate whatever scene is live, enter `End`.
    fn finish(&mut self) {
        info!("Engine stopping");

        let Self {
            registry, context, ..
        } = self;
        registry.active_mut().unload(context);

        self.state = GameState::End;
    }

    //--- Scene Transitions ------------------------------------------------

    /// Applies the pending scene change, if one is armed.
    ///
    /// This is the only point in a tick where the active scene may
    /// change, so no object ever observes a half-swapped scene. The
    /// request is disarmed by `take_transition` whether or not the
    /// target survives re-validation.
    fn apply_pending_transition(&mut self) {
        let Some(target) = self.context.take_transition() else {
            return;
        };

        if target >= self.registry.len() {
            warn!(
                "Pending scene change to {} is out of range, ignoring",
                target
            );
            return;
        }

        debug!(
            "Changing scene: {} -> {}",
            self.registry.active_index(),
            target
        );

        let Self {
            registry, context, ..
        } = self;
        registry.active_mut().unload(context);
        registry.set_active(target);

        self.activate_current_scene();
    }

    /// Loads the active scene and starts every object it holds.
    fn activate_current_scene(&mut self) {
        let Self {
            registry, context, ..
        } = self;
        let scene = registry.active_mut();

        scene.load(context);
        context.refresh(scene.objects().snapshot());

        for index in 0..scene.objects().len() {
            if let Some(object) = scene.objects_mut().get_mut(index) {
                object.on_start(context);
            }
        }
    }

    //--- Frame Passes -----------------------------------------------------

    /// Captures the committed facts of the active scene into the context.
    fn refresh_snapshot(&mut self) {
        let Self {
            registry, context, ..
        } = self;
        context.refresh(registry.active().objects().snapshot());
    }

    /// Update-then-draw, interleaved per object in collection order.
    ///
    /// The interleaving means an object's draw can observe peers that
    /// have not yet updated this tick; that is a deliberate simplification.
    /// Objects spawned during the pass are not part of it (the index
    /// bound is frozen at pass start), and an object whose destroyed
    /// flag is set, before the pass or during it, is neither updated
    /// nor drawn.
    fn update_and_draw(&mut self) {
        let Self {
            registry, context, ..
        } = self;
        let scene = registry.active_mut();
        let committed = scene.objects().len();

        for index in 0..committed {
            let skip = scene
                .objects()
                .get(index)
                .map_or(true, |object| object.is_destroyed());
            if skip {
                continue;
            }

            if let Some(object) = scene.objects_mut().get_mut(index) {
                object.update(context);
            }

            // The object may have destroyed itself during its update.
            let destroyed = scene
                .objects()
                .get(index)
                .map_or(true, |object| object.is_destroyed());
            if !destroyed {
                scene.draw_object(index);
            }
        }
    }

    /// Pairwise same-cell collision resolution.
    ///
    /// Every ordered pair (A, B) of distinct objects whose cells match
    /// in the pass-start snapshot gets `A.on_collision(B)`. Both
    /// orderings run, so each side decides its own reaction. Destruction
    /// flags raised mid-pass do not remove anyone from the scan; the
    /// sweep runs afterwards.
    fn collision_pass(&mut self) {
        let Self {
            registry, context, ..
        } = self;
        let scene = registry.active_mut();
        let snapshot = scene.objects().snapshot();

        for index in 0..snapshot.len() {
            for (other_index, other) in snapshot.iter().enumerate() {
                if index == other_index || snapshot[index].cell != other.cell {
                    continue;
                }

                if let Some(object) = scene.objects_mut().get_mut(index) {
                    object.on_collision(other, context);
                }
            }
        }
    }

    /// Removes destroyed objects, then appends this tick's spawns.
    ///
    /// Spawns join the tail in request order, which is what makes them
    /// effective on the next tick's passes rather than this one's.
    fn sweep_and_commit(&mut self) {
        let spawned = self.context.take_spawned();

        let scene = self.registry.active_mut();
        scene.objects_mut().remove_destroyed();
        for object in spawned {
            scene.objects_mut().add(object);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
