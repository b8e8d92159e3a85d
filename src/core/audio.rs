//=========================================================================
// Audio Capability
//=========================================================================
//
// Consumed interface over the background-music subsystem.
//
// The engine itself never touches audio. The capability is reachable
// only through EngineContext::audio(), so play/stop/toggle calls come
// from game objects (an audio controller playing on construction,
// toggling on a key, stopping on destruction).
//
//=========================================================================

//=== Audio ===============================================================

/// Background-music control surface.
pub trait Audio {
    fn play_music(&mut self);

    fn stop_music(&mut self);

    fn toggle_music(&mut self);
}

//=== NullAudio ===========================================================

/// Audio backend that does nothing. Default when the game ships no
/// audio subsystem.
pub struct NullAudio;

impl Audio for NullAudio {
    fn play_music(&mut self) {}

    fn stop_music(&mut self) {}

    fn toggle_music(&mut self) {}
}
