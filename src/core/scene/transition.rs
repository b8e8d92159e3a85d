//=========================================================================
// Pending Transition
//=========================================================================
//
// Deferred scene-change record.
//
// Objects request scene changes mid-tick; the engine consumes the
// record at exactly one point, the top of the next tick. A scene swap
// therefore never happens while a pass is iterating the active scene.
//
//=========================================================================

//=== Pending Transition ==================================================

/// Two-state record of a requested scene change.
///
/// Either disarmed (no target) or armed with the index of the scene to
/// activate. `take` is the single consume point: it returns the target
/// and disarms the record in one step, so a request can never be
/// applied twice or survive a failed apply.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    target: Option<usize>,
}

impl PendingTransition {
    /// Creates a disarmed record.
    pub fn new() -> Self {
        Self { target: None }
    }

    /// Arms the record with a target scene index.
    ///
    /// A second request before the first is consumed overwrites it; the
    /// last request of a tick wins.
    pub fn request(&mut self, index: usize) {
        self.target = Some(index);
    }

    /// Returns true while a request is armed.
    pub fn is_pending(&self) -> bool {
        self.target.is_some()
    }

    /// Consumes the request, disarming the record.
    pub fn take(&mut self) -> Option<usize> {
        self.target.take()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_disarmed() {
        let transition = PendingTransition::new();
        assert!(!transition.is_pending());
    }

    #[test]
    fn request_arms_and_take_consumes() {
        let mut transition = PendingTransition::new();
        transition.request(2);
        assert!(transition.is_pending());

        assert_eq!(transition.take(), Some(2));
        assert!(!transition.is_pending());
        assert_eq!(transition.take(), None);
    }

    #[test]
    fn later_request_overwrites_earlier() {
        let mut transition = PendingTransition::new();
        transition.request(1);
        transition.request(3);
        assert_eq!(transition.take(), Some(3));
    }
}
