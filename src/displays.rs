
use std::cell::{Cell, RefCell};

use chrono::Local;
use itertools::{Itertools, MinMaxResult};

use crate::measurements::Measurement;
use crate::observer::IObserver;

/// Prints every reading it is given, one line per update.
pub struct CurrentConditionsDisplay {
    name: String,
    timestamps: bool,
    shown: Cell<usize>,
}

impl CurrentConditionsDisplay {
    pub fn new(name: &str, timestamps: bool) -> Self {
        Self {
            name: name.to_string(),
            timestamps,
            shown: Cell::new(0),
        }
    }

    pub fn render(&self, m: &Measurement) -> String {
        let line = format!("{}: {}", self.name, m);
        if self.timestamps {
            format!("{} @ {}", line, Local::now().format("%d %b %H:%M"))
        } else {
            line
        }
    }

    /// How many updates have been printed so far.
    pub fn shown(&self) -> usize {
        self.shown.get()
    }
}

impl IObserver for CurrentConditionsDisplay {
    fn update(&self, temperature: f32, humidity: f32, pressure: f32) {
        let m = Measurement::new(temperature, humidity, pressure);
        println!("{}", self.render(&m));
        self.shown.set(self.shown.get() + 1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureStats {
    pub avg: f32,
    pub max: f32,
    pub min: f32,
}

/// Running min/avg/max of every temperature received.
pub struct StatisticsDisplay {
    name: String,
    temperatures: RefCell<Vec<f32>>,
}

impl StatisticsDisplay {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            temperatures: RefCell::new(Vec::new()),
        }
    }

    pub fn summary(&self) -> Option<TemperatureStats> {
        let temps = self.temperatures.borrow();
        let (min, max) = match temps.iter().copied().minmax() {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(t) => (t, t),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };
        let avg = temps.iter().sum::<f32>() / temps.len() as f32;

        Some(TemperatureStats { avg, max, min })
    }

    pub fn render(&self) -> Option<String> {
        self.summary().map(|s| {
            format!(
                "{}: Avg/Max/Min temperature = {:.1}/{}/{}",
                self.name, s.avg, s.max, s.min
            )
        })
    }
}

impl IObserver for StatisticsDisplay {
    fn update(&self, temperature: f32, _humidity: f32, _pressure: f32) {
        self.temperatures.borrow_mut().push(temperature);
        if let Some(line) = self.render() {
            println!("{}", line);
        }
    }
}
