//! Callback abstraction for widget hooks
//!
//! Wraps the `Option<Box<dyn Fn(T) -> M>>` pattern used for the slider's
//! change notification and label formatting.
//!
//! # Examples
//!
//! ```ignore
//! use range_slider_ui::{Callback, RangeChange};
//!
//! let on_change: Callback<RangeChange, Message> = Callback::new(Message::RangeChanged);
//! let label: Callback<f64, String> = Callback::new(|v: f64| format!("{v} km"));
//!
//! assert_eq!(label.call(3.0).as_deref(), Some("3 km"));
//! ```

use std::fmt;

/// A callback wrapper that encapsulates an optional handler.
///
/// # Type Parameters
///
/// - `T`: The input type for the callback (e.g. the final range, a label value)
/// - `M`: The type returned by the callback
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `None` if no callback is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}
