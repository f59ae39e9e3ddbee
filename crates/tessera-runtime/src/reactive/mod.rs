#![forbid(unsafe_code)]

//! Single-threaded reactive values.
//!
//! [`Observable`] is the store behind viewport and theme state. Subscribing
//! returns a [`Subscription`] guard; dropping the guard is the unsubscribe,
//! so listener registration and teardown are always paired.

mod observable;

pub use observable::{Observable, Subscription};
