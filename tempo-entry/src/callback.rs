//! Notification handles passed to a picker at construction.
//!
//! Handles compare by identity so picker arguments stay comparable without
//! comparing closures.

use std::sync::Arc;

use crate::time::TimeValue;

/// Stable, comparable handle for `Fn(T)`.
pub struct Listener<T> {
    inner: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> Listener<T> {
    /// Create a listener from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(handler),
        }
    }

    /// A listener that ignores every notification.
    pub fn noop() -> Self
    where
        T: 'static,
    {
        Self::new(|_| {})
    }

    /// Invoke the listener.
    pub fn call(&self, value: T) {
        (self.inner)(value);
    }
}

impl<T, F> From<F> for Listener<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T> Clone for Listener<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for Listener<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Eq for Listener<T> {}

impl<T> std::fmt::Debug for Listener<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener").finish_non_exhaustive()
    }
}

/// The outbound notifications of one picker instance.
#[derive(Clone, PartialEq, Debug)]
pub struct PickerListeners {
    /// Fired after every committing mutation with the full new value.
    pub on_time_change: Listener<TimeValue>,
    /// Fired after the visibility flag is written.
    pub on_visibility_change: Listener<bool>,
}

impl Default for PickerListeners {
    fn default() -> Self {
        Self {
            on_time_change: Listener::noop(),
            on_visibility_change: Listener::noop(),
        }
    }
}
