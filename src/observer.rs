
use std::rc::{Rc, Weak};

use tracing::debug;

/***
 * Observer
 *
 *  Anything that wants to hear about new weather readings implements
 * IObserver. Subjects only ever hold a Weak reference to an observer, so the
 * owner of the Rc decides how long the observer lives.
 */
pub trait IObserver {
    fn update(&self, temperature: f32, humidity: f32, pressure: f32);
}

pub trait ISubject {
    fn register_observer(&mut self, observer: &Rc<dyn IObserver>);
    fn remove_observer(&mut self, observer: &Rc<dyn IObserver>);
}

/// Ordered set of non-owning observer references, keyed by object identity.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Weak<dyn IObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if this object is already registered.
    pub fn register(&mut self, observer: &Rc<dyn IObserver>) -> bool {
        if self.position(observer).is_some() {
            debug!("observer already registered, ignoring");
            return false;
        }

        self.observers.push(Rc::downgrade(observer));
        debug!(observers = self.observers.len(), "observer registered");
        true
    }

    pub fn remove(&mut self, observer: &Rc<dyn IObserver>) -> bool {
        match self.position(observer) {
            Some(i) => {
                self.observers.remove(i);
                debug!(observers = self.observers.len(), "observer removed");
                true
            }
            None => false,
        }
    }

    /// Drops references whose observer has been released by its owner.
    pub fn prune(&mut self) -> usize {
        let before = self.observers.len();
        self.observers.retain(|o| o.strong_count() > 0);

        let pruned = before - self.observers.len();
        if pruned > 0 {
            debug!(pruned, observers = self.observers.len(), "pruned expired observers");
        }
        pruned
    }

    pub fn notify(&mut self, temperature: f32, humidity: f32, pressure: f32) {
        self.prune();

        // an update() may release another observer, so upgrade each one
        // right before calling it
        for weak in self.observers.iter() {
            if let Some(observer) = weak.upgrade() {
                observer.update(temperature, humidity, pressure);
            }
        }
    }

    /// Number of references held, including expired ones not yet pruned.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.observers.iter().filter(|o| o.strong_count() > 0).count()
    }

    // compare data addresses only; the vtable half of the fat pointer may
    // differ between two handles to the same object
    fn position(&self, observer: &Rc<dyn IObserver>) -> Option<usize> {
        let target = Rc::as_ptr(observer);
        self.observers
            .iter()
            .position(|o| std::ptr::addr_eq(o.as_ptr(), target))
    }
}
