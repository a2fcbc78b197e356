//! Synchronized state access
//!
//! The sensor tick reads the session while the mark action writes it. On a
//! single execution context a `RefCell` is enough; on parallel hardware the
//! implementation must hold a lock for the whole closure so an anchor is
//! never snapshotted from a heading that is being replaced.

/// Platform-agnostic synchronized state access.
///
/// # Example
///
/// ```
/// use sightline_core::traits::{MockState, SharedState};
///
/// let state = MockState::new(42u32);
/// state.with_mut(|v| *v += 1);
/// assert_eq!(state.with(|v| *v), 43);
/// ```
pub trait SharedState<T> {
    /// Access state immutably.
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R;

    /// Access state mutably. The closure runs atomically with respect to
    /// other `with` / `with_mut` calls.
    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;
}

/// Single-threaded state using `RefCell`.
///
/// # Panics
///
/// Panics if borrowing rules are violated (e.g., calling `with_mut` while
/// `with` is active).
pub struct MockState<T> {
    inner: core::cell::RefCell<T>,
}

impl<T> MockState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: core::cell::RefCell::new(value),
        }
    }

    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<T> SharedState<T> for MockState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.borrow())
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.inner.borrow_mut())
    }
}
