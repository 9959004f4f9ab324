//! Edge cost, either fixed up front or computed once from a provider.

use std::cell::RefCell;
use std::fmt;

type Provider = Box<dyn FnOnce() -> f64 + Send>;

enum WeightState {
    Absent,
    Fixed(f64),
    Deferred(Provider),
}

/// The cost attached to an edge.
///
/// A weight is one of three things: the "no weight" sentinel carried by
/// edges of unweighted graphs, a fixed value, or a deferred provider. A
/// deferred provider runs the first time the value is read and the result
/// replaces it, so the provider is invoked at most once.
pub struct Weight {
    state: RefCell<WeightState>,
}

impl Weight {
    /// The sentinel for edges that carry no cost.
    pub fn none() -> Self {
        Self {
            state: RefCell::new(WeightState::Absent),
        }
    }

    /// A weight with a known value.
    pub fn fixed(value: f64) -> Self {
        Self {
            state: RefCell::new(WeightState::Fixed(value)),
        }
    }

    /// A weight computed from `provider` on first read.
    pub fn deferred<F>(provider: F) -> Self
    where
        F: FnOnce() -> f64 + Send + 'static,
    {
        Self {
            state: RefCell::new(WeightState::Deferred(Box::new(provider))),
        }
    }

    /// Whether this is the "no weight" sentinel.
    pub fn is_none(&self) -> bool {
        matches!(*self.state.borrow(), WeightState::Absent)
    }

    /// Whether the value is known without running a provider.
    pub fn is_resolved(&self) -> bool {
        !matches!(*self.state.borrow(), WeightState::Deferred(_))
    }

    /// The cost, resolving a deferred provider if needed. `None` for the sentinel.
    pub fn value(&self) -> Option<f64> {
        let mut state = self.state.borrow_mut();
        if let WeightState::Deferred(_) = &*state {
            if let WeightState::Deferred(provider) =
                std::mem::replace(&mut *state, WeightState::Absent)
            {
                *state = WeightState::Fixed(provider());
            }
        }
        match *state {
            WeightState::Fixed(value) => Some(value),
            _ => None,
        }
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::none()
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Self::fixed(value)
    }
}

impl From<f32> for Weight {
    fn from(value: f32) -> Self {
        Self::fixed(f64::from(value))
    }
}

impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Self::fixed(f64::from(value))
    }
}

impl fmt::Debug for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            WeightState::Absent => f.write_str("Weight::None"),
            WeightState::Fixed(value) => write!(f, "Weight({value})"),
            WeightState::Deferred(_) => f.write_str("Weight(<deferred>)"),
        }
    }
}
