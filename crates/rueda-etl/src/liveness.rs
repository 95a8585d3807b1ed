//! Liveness tokens guarding state updates from asynchronous loads.
//!
//! A view owns a [`Liveness`] and hands a [`LivenessToken`] to every load it
//! starts. Once the view is torn down (explicitly or by dropping the
//! `Liveness`), every token reports dead and [`LivenessToken::apply`]
//! refuses to touch state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Owner side of a liveness flag.
#[derive(Debug)]
pub struct Liveness {
    alive: Arc<AtomicBool>,
}

impl Liveness {
    #[must_use]
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// A token observing this flag.
    #[must_use]
    pub fn token(&self) -> LivenessToken {
        LivenessToken {
            alive: Arc::clone(&self.alive),
        }
    }

    /// Mark the view as gone. Idempotent.
    pub fn teardown(&self) {
        self.alive.store(false, Ordering::Release);
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Liveness {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Observer side of a liveness flag, carried by asynchronous loads.
#[derive(Debug, Clone)]
pub struct LivenessToken {
    alive: Arc<AtomicBool>,
}

impl LivenessToken {
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Run `update` against `state` only while the owning view is live.
    /// Returns whether the update ran.
    pub fn apply<S, F>(&self, state: &mut S, update: F) -> bool
    where
        F: FnOnce(&mut S),
    {
        if !self.is_live() {
            log::debug!("Ignoring state update after teardown");
            return false;
        }
        update(state);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_live() {
        let liveness = Liveness::new();
        assert!(liveness.is_live());
        assert!(liveness.token().is_live());
    }

    #[test]
    fn test_teardown_kills_all_tokens() {
        let liveness = Liveness::new();
        let a = liveness.token();
        let b = a.clone();
        liveness.teardown();
        liveness.teardown();
        assert!(!a.is_live());
        assert!(!b.is_live());
    }

    #[test]
    fn test_drop_tears_down() {
        let token = {
            let liveness = Liveness::new();
            liveness.token()
        };
        assert!(!token.is_live());
    }

    #[test]
    fn test_apply_only_while_live() {
        let liveness = Liveness::new();
        let token = liveness.token();
        let mut count = 0;

        assert!(token.apply(&mut count, |c| *c += 1));
        liveness.teardown();
        assert!(!token.apply(&mut count, |c| *c += 1));
        assert_eq!(count, 1);
    }
}
