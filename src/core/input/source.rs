//=========================================================================
// Input Sources
//
// Consumed interface over the input-capture device, plus the two
// implementations the crate ships: a channel-backed source fed by the
// embedding platform and a silent source for headless use.
//
// Responsibilities:
// - Define the single-poll contract the InputRouter consumes
// - Bridge a platform input thread into the core via crossbeam-channel
// - Degrade to "no input" on disconnect instead of failing
//
//=========================================================================

//=== External Crates =====================================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::debug;

//=== InputSource =========================================================

/// A pollable stream of key symbols.
///
/// `poll` performs exactly one non-blocking read: the next pending
/// symbol, or `None` when nothing is waiting. The router calls it once
/// per tick; implementations must never block.
pub trait InputSource {
    fn poll(&mut self) -> Option<char>;
}

//=== NullSource ==========================================================

/// Source that never produces input. Default for engines driven purely
/// by their own simulation (and for tests that ignore input).
pub struct NullSource;

impl InputSource for NullSource {
    fn poll(&mut self) -> Option<char> {
        None
    }
}

//=== ChannelSource =======================================================

/// Input fed across a bounded channel from the embedding platform.
///
/// The platform side (a terminal reader thread, usually) keeps the
/// [`Sender`] and pushes one symbol per key press; the engine side owns
/// the receiver. A dropped sender reads as silence from then on; the
/// loop stays alive on a vanished input device.
pub struct ChannelSource {
    receiver: Receiver<char>,
}

impl ChannelSource {
    /// Creates a bounded channel and the source draining it.
    ///
    /// Capacity bounds how many unconsumed key presses may queue before
    /// the platform side starts dropping them.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn bounded(capacity: usize) -> (Sender<char>, Self) {
        assert!(capacity > 0, "Input channel capacity must be positive");

        debug!("Input channel created (capacity: {})", capacity);
        let (sender, receiver) = bounded(capacity);
        (sender, Self { receiver })
    }
}

impl InputSource for ChannelSource {
    fn poll(&mut self) -> Option<char> {
        self.receiver.try_recv().ok()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_source_is_silent() {
        let mut source = NullSource;
        assert_eq!(source.poll(), None);
        assert_eq!(source.poll(), None);
    }

    #[test]
    fn channel_source_delivers_symbols_in_order() {
        let (sender, mut source) = ChannelSource::bounded(8);
        sender.send('a').unwrap();
        sender.send('b').unwrap();

        assert_eq!(source.poll(), Some('a'));
        assert_eq!(source.poll(), Some('b'));
        assert_eq!(source.poll(), None);
    }

    #[test]
    fn channel_source_reads_silence_after_disconnect() {
        let (sender, mut source) = ChannelSource::bounded(8);
        sender.send('x').unwrap();
        drop(sender);

        assert_eq!(source.poll(), Some('x'));
        assert_eq!(source.poll(), None);
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn channel_source_rejects_zero_capacity() {
        let _ = ChannelSource::bounded(0);
    }
}
