pub mod config;
pub mod displays;
pub mod measurements;
pub mod observer;
pub mod script;
pub mod shared;

pub use measurements::{Measurement, WeatherStation};
pub use observer::{IObserver, ISubject, ObserverRegistry};
pub use shared::{SharedObserver, SharedWeatherStation};
