#![forbid(unsafe_code)]

//! Shared value with change notification and a version counter.
//!
//! Handles are cheap clones of one `Rc<RefCell<..>>`. Listeners are kept as
//! `Weak` references; the matching strong reference lives in the
//! [`Subscription`] guard, so dropping the guard silently detaches the
//! listener. Dead entries are pruned on the next notification or subscription.
//!
//! # Invariants
//!
//! 1. `version` advances by exactly 1 per value-changing write.
//! 2. Writing a value equal to the current one is a no-op (no version bump,
//!    no notification).
//! 3. Listeners run in subscription order, after the borrow is released.
//!
//! # Failure Modes
//!
//! | Scenario                              | Behavior                     |
//! |---------------------------------------|------------------------------|
//! | Listener writes the same observable   | Panics (`RefCell` borrow)    |
//! | Guard leaked with `mem::forget`       | Listener stays registered    |

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;
type WeakListener<T> = Weak<dyn Fn(&T)>;

struct Shared<T> {
    value: T,
    version: u64,
    listeners: Vec<WeakListener<T>>,
}

/// A shared, versioned value.
pub struct Observable<T> {
    shared: Rc<RefCell<Shared<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("Observable")
            .field("value", &shared.value)
            .field("version", &shared.version)
            .field("listeners", &shared.listeners.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Create an observable at version 0 with no listeners.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                value,
                version: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.shared.borrow().value.clone()
    }

    /// Borrow the current value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.shared.borrow().value)
    }

    /// Replace the value. Returns true if it changed.
    ///
    /// # Panics
    ///
    /// Panics if called from inside one of this observable's listeners.
    pub fn set(&self, value: T) -> bool {
        {
            let mut shared = self.shared.borrow_mut();
            if shared.value == value {
                return false;
            }
            shared.value = value;
            shared.version += 1;
        }
        self.notify();
        true
    }

    /// Mutate in place. Returns true if the value changed.
    ///
    /// # Panics
    ///
    /// Panics if called from inside one of this observable's listeners.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut next = self.get();
        f(&mut next);
        self.set(next)
    }

    /// Register a listener for future changes.
    ///
    /// The listener is not called with the current value. Keep the returned
    /// guard alive for as long as the listener should run.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let strong: Listener<T> = Rc::new(listener);
        let mut shared = self.shared.borrow_mut();
        shared.listeners.retain(|l| l.strong_count() > 0);
        shared.listeners.push(Rc::downgrade(&strong));
        drop(shared);
        Subscription {
            _listener: Box::new(strong),
        }
    }

    /// Version counter; changes exactly when the value does.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.shared.borrow().version
    }

    /// Listeners whose guards are still alive.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.shared
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.strong_count() > 0)
            .count()
    }

    fn notify(&self) {
        let (live, value): (Vec<Listener<T>>, T) = {
            let mut shared = self.shared.borrow_mut();
            shared.listeners.retain(|l| l.strong_count() > 0);
            let live = shared.listeners.iter().filter_map(Weak::upgrade).collect();
            (live, shared.value.clone())
        };
        for listener in &live {
            listener(&value);
        }
    }
}

/// Keeps a listener registered; drop to unsubscribe.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    // Type-erased `Rc<dyn Fn(&T)>`.
    _listener: Box<dyn std::any::Any>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Subscription")
    }
}
