//=========================================================================
// Engine Context
//=========================================================================
//
// The query and command surface handed to game code.
//
// Every object callback (start/update/collision) and every scene hook
// receives `&mut EngineContext`. It replaces ambient global access to
// the engine: objects can read the tick's input, enumerate peers,
// request scene changes, spawn, quit, and reach the audio capability,
// and nothing else.
//
// Read queries answer from the committed snapshot of the active scene
// (taken after the previous sweep, at the top of the current pass) plus
// any objects spawned earlier in the current tick. Commands are
// deferred: spawns join the scene at the end of the tick, transitions
// apply at the top of the next one.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::audio::Audio;
use crate::core::object::{Cell, GameObject, Kind, ObjectInfo, Tag};
use crate::core::scene::PendingTransition;

//=== EngineContext =======================================================

/// Per-tick view of the engine, scoped to what game code may touch.
pub struct EngineContext<K: Kind, T: Tag> {
    input: Option<char>,
    players: u32,
    scene_names: Vec<String>,
    committed: Vec<ObjectInfo<K, T>>,
    spawned: Vec<Box<dyn GameObject<K, T>>>,
    spawned_info: Vec<ObjectInfo<K, T>>,
    transition: PendingTransition,
    quit: bool,
    audio: Box<dyn Audio>,
}

impl<K: Kind, T: Tag> EngineContext<K, T> {
    //--- Construction (engine-side) ---------------------------------------

    pub(crate) fn new(scene_names: Vec<String>, players: u32, audio: Box<dyn Audio>) -> Self {
        Self {
            input: None,
            players,
            scene_names,
            committed: Vec::new(),
            spawned: Vec::new(),
            spawned_info: Vec::new(),
            transition: PendingTransition::new(),
            quit: false,
            audio,
        }
    }

    //--- Read Queries -----------------------------------------------------

    /// The input symbol polled at the top of this tick, if any.
    ///
    /// Stable for the whole tick: every caller sees the same value.
    pub fn input(&self) -> Option<char> {
        self.input
    }

    /// The player count the engine was built with.
    pub fn player_count(&self) -> u32 {
        self.players
    }

    /// Live objects of one concrete kind, in collection order.
    ///
    /// Objects already marked destroyed are excluded; objects spawned
    /// earlier this tick are included.
    pub fn find_by_kind(&self, kind: K) -> impl Iterator<Item = ObjectInfo<K, T>> + '_ {
        self.live().filter(move |info| info.kind == kind)
    }

    /// Live objects carrying one semantic tag, in collection order.
    pub fn find_by_tag(&self, tag: T) -> impl Iterator<Item = ObjectInfo<K, T>> + '_ {
        self.live().filter(move |info| info.tag == tag)
    }

    /// Whether any live object occupies the given cell.
    pub fn object_at(&self, cell: Cell) -> bool {
        self.live().any(|info| info.cell == cell)
    }

    /// Number of live objects in the active scene.
    pub fn live_count(&self) -> usize {
        self.live().count()
    }

    /// True when no live object of `kind` remains.
    ///
    /// This is the game-over predicate: an empty scene qualifies just
    /// as much as a scene whose last such object was destroyed.
    pub fn none_remaining(&self, kind: K) -> bool {
        self.find_by_kind(kind).next().is_none()
    }

    //--- Commands ---------------------------------------------------------

    /// Queues an object for insertion into the active scene.
    ///
    /// The object becomes visible to queries immediately and joins the
    /// update/draw/collision passes on the next tick.
    pub fn spawn(&mut self, object: Box<dyn GameObject<K, T>>) {
        self.spawned_info.push(ObjectInfo::of(object.as_ref()));
        self.spawned.push(object);
    }

    /// Requests a transition to the scene at `index`.
    ///
    /// Applied at the top of the next tick, never mid-frame. An
    /// out-of-range index is ignored with a warning; a second request
    /// within the same tick overwrites the first.
    pub fn change_scene(&mut self, index: usize) {
        if index >= self.scene_names.len() {
            warn!(
                "Scene change request {} is out of range ({} scenes), ignoring",
                index,
                self.scene_names.len()
            );
            return;
        }

        debug!("Scene change to index {} requested", index);
        self.transition.request(index);
    }

    /// Requests a transition to the first scene with the given name.
    ///
    /// A name that matches nothing is a complete no-op: any previously
    /// armed request stays armed.
    pub fn change_scene_named(&mut self, name: &str) {
        match self.scene_names.iter().position(|candidate| candidate == name) {
            Some(index) => self.change_scene(index),
            None => warn!("No scene named '{}', ignoring change request", name),
        }
    }

    /// True while a scene change is armed and waiting for the next
    /// tick boundary.
    pub fn transition_pending(&self) -> bool {
        self.transition.is_pending()
    }

    /// Asks the loop to stop. Honored at the end of the current tick,
    /// after all passes complete. Sticky: cannot be rescinded.
    pub fn request_quit(&mut self) {
        debug!("Quit requested");
        self.quit = true;
    }

    /// The background-music capability.
    pub fn audio(&mut self) -> &mut dyn Audio {
        self.audio.as_mut()
    }

    //--- Engine-side Plumbing ---------------------------------------------

    pub(crate) fn set_input(&mut self, symbol: Option<char>) {
        self.input = symbol;
    }

    /// Replaces the committed snapshot at a pass boundary.
    pub(crate) fn refresh(&mut self, committed: Vec<ObjectInfo<K, T>>) {
        self.committed = committed;
    }

    /// Drains the spawn queue for commit into the active scene.
    pub(crate) fn take_spawned(&mut self) -> Vec<Box<dyn GameObject<K, T>>> {
        self.spawned_info.clear();
        std::mem::take(&mut self.spawned)
    }

    /// Consumes the pending transition, disarming it.
    pub(crate) fn take_transition(&mut self) -> Option<usize> {
        self.transition.take()
    }

    pub(crate) fn quit_requested(&self) -> bool {
        self.quit
    }

    //--- Internal ---------------------------------------------------------

    fn live(&self) -> impl Iterator<Item = ObjectInfo<K, T>> + '_ {
        self.committed
            .iter()
            .chain(self.spawned_info.iter())
            .copied()
            .filter(|info| !info.destroyed)
    }
}

//=== Tests ===============================================================
