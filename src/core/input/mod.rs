//=========================================================================
// Input Router
//
// Poll-once-per-tick cache over the consumed input source.
//
// Responsibilities:
// - Perform exactly one non-blocking poll per tick (`check_input`)
// - Cache the polled symbol for the remainder of the tick
// - Expose the cached symbol to any number of readers (`input`)
//
// Notes:
// Every `input()` read between two `check_input()` calls observes the
// same value, so all objects in a tick agree on what was pressed.
// `None` is the "no input this tick" sentinel.
//
//=========================================================================

//=== Submodules ==========================================================

mod source;

//=== Public API ==========================================================

pub use source::{ChannelSource, InputSource, NullSource};

//=== InputRouter =========================================================

/// Owns the input source and the per-tick symbol cache.
pub struct InputRouter {
    source: Box<dyn InputSource>,
    cached: Option<char>,
}

impl InputRouter {
    pub fn new(source: Box<dyn InputSource>) -> Self {
        Self {
            source,
            cached: None,
        }
    }

    //--- check_input() ----------------------------------------------------
    //
    // One non-blocking poll of the source. Called by the engine at the
    // top of each tick, never by game code.
    //
    pub fn check_input(&mut self) {
        self.cached = self.source.poll();
    }

    //--- input() ----------------------------------------------------------
    //
    // The symbol cached by the last poll, without polling again.
    //
    pub fn input(&self) -> Option<char> {
        self.cached
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Scripted {
        symbols: VecDeque<Option<char>>,
    }

    impl Scripted {
        fn new(symbols: &[Option<char>]) -> Self {
            Self {
                symbols: symbols.iter().copied().collect(),
            }
        }
    }

    impl InputSource for Scripted {
        fn poll(&mut self) -> Option<char> {
            self.symbols.pop_front().flatten()
        }
    }

    #[test]
    fn router_starts_with_no_input() {
        let router = InputRouter::new(Box::new(NullSource));
        assert_eq!(router.input(), None);
    }

    #[test]
    fn cached_symbol_is_stable_between_polls() {
        let mut router = InputRouter::new(Box::new(Scripted::new(&[Some('w'), Some('s')])));

        router.check_input();
        assert_eq!(router.input(), Some('w'));
        assert_eq!(router.input(), Some('w'));

        router.check_input();
        assert_eq!(router.input(), Some('s'));
    }

    #[test]
    fn empty_poll_clears_the_previous_symbol() {
        let mut router = InputRouter::new(Box::new(Scripted::new(&[Some('w'), None])));

        router.check_input();
        assert_eq!(router.input(), Some('w'));

        router.check_input();
        assert_eq!(router.input(), None);
    }
}
