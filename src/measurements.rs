
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::observer::{IObserver, ISubject, ObserverRegistry};

/// One weather reading: degrees C, percent relative humidity, hPa.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub temperature: f32,
    pub humidity: f32,
    pub pressure: f32,
}

impl Measurement {
    pub fn new(temperature: f32, humidity: f32, pressure: f32) -> Self {
        Self { temperature, humidity, pressure }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Temperature = {}°C, Humidity = {}%, Pressure = {} hPa",
            self.temperature, self.humidity, self.pressure
        )
    }
}

/***
 * WeatherStation
 *
 *  The weather station is the Subject. It
 *      - has an interface to add/remove observers
 *      - notifies observers every time a new set of measurements is set
 *  Observers are held weakly. An observer dropped by its owner is never
 * called again and is pruned on the next notification.
 *
 *  Values are stored as given, with no range checks.
 */
#[derive(Default)]
pub struct WeatherStation {
    current: Measurement,
    observers: ObserverRegistry,
}

impl WeatherStation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_measurements(&mut self, temperature: f32, humidity: f32, pressure: f32) {
        self.current = Measurement::new(temperature, humidity, pressure);
        trace!(measurement = %self.current, "new measurements");
        self.notify_observers();
    }

    pub fn measurements(&self) -> Measurement {
        self.current
    }

    /// Observers still alive; expired ones are not counted even before pruning.
    pub fn observer_count(&self) -> usize {
        self.observers.live_count()
    }

    fn notify_observers(&mut self) {
        let Measurement { temperature, humidity, pressure } = self.current;
        self.observers.notify(temperature, humidity, pressure);
    }
}

impl ISubject for WeatherStation {
    fn register_observer(&mut self, observer: &Rc<dyn IObserver>) {
        self.observers.register(observer);
    }

    fn remove_observer(&mut self, observer: &Rc<dyn IObserver>) {
        self.observers.remove(observer);
    }
}
