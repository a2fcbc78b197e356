//! Thread-safe session state for hosts that tick and mark from different
//! threads.

use std::sync::{Mutex, PoisonError};

use sightline_core::traits::SharedState;

/// `SharedState` backed by `std::sync::Mutex`.
///
/// The lock is held for the whole closure, so a mark issued from one thread
/// cannot interleave with a tick replacing the live heading on another.
/// Poisoning is ignored.
pub struct LockedState<T> {
    inner: Mutex<T>,
}

impl<T> LockedState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
        }
    }
}

impl<T> SharedState<T> for LockedState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn locked_state_serializes_writers() {
        let state = Arc::new(LockedState::new(0u32));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let state = Arc::clone(&state);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        state.with_mut(|v| *v += 1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(state.with(|v| *v), 4000);
    }
}
