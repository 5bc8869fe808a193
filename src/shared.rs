#[cfg(test)]
mod tests;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::debug;

use crate::measurements::Measurement;
use crate::observer::IObserver;

pub type SharedObserver = Arc<dyn IObserver + Send + Sync>;

#[derive(Default)]
struct State {
    current: Measurement,
    observers: Vec<Weak<dyn IObserver + Send + Sync>>,
}

impl State {
    fn position(&self, observer: &SharedObserver) -> Option<usize> {
        let target = Arc::as_ptr(observer);
        self.observers
            .iter()
            .position(|o| std::ptr::addr_eq(o.as_ptr(), target))
    }
}

/// Weather station that can be shared between threads.
///
/// Registration, removal and the whole prune/notify sequence run under one
/// lock, so readings reach every observer in the order they were published.
/// `update` runs with that lock held: an observer must not call back into the
/// same station.
#[derive(Default)]
pub struct SharedWeatherStation {
    state: Mutex<State>,
}

impl SharedWeatherStation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_observer(&self, observer: &SharedObserver) {
        let mut state = self.lock();
        if state.position(observer).is_none() {
            state.observers.push(Arc::downgrade(observer));
            debug!(observers = state.observers.len(), "shared observer registered");
        }
    }

    pub fn remove_observer(&self, observer: &SharedObserver) {
        let mut state = self.lock();
        if let Some(i) = state.position(observer) {
            state.observers.remove(i);
            debug!(observers = state.observers.len(), "shared observer removed");
        }
    }

    pub fn set_measurements(&self, temperature: f32, humidity: f32, pressure: f32) {
        let mut state = self.lock();
        state.current = Measurement::new(temperature, humidity, pressure);

        let before = state.observers.len();
        state.observers.retain(|o| o.strong_count() > 0);
        let pruned = before - state.observers.len();
        if pruned > 0 {
            debug!(pruned, "pruned expired shared observers");
        }

        for weak in state.observers.iter() {
            if let Some(observer) = weak.upgrade() {
                observer.update(temperature, humidity, pressure);
            }
        }
    }

    pub fn measurements(&self) -> Measurement {
        self.lock().current
    }

    pub fn observer_count(&self) -> usize {
        self.lock()
            .observers
            .iter()
            .filter(|o| o.strong_count() > 0)
            .count()
    }

    // state is consistent between statements, so a panic in another holder
    // leaves nothing half-written
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
