use std::{env, rc::Rc};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_station::{
    config::{self, Config},
    displays::{CurrentConditionsDisplay, StatisticsDisplay},
    script, IObserver, ISubject, Measurement, WeatherStation,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = config::parse_config(&args).unwrap_or_else(|e| e.exit());

    init_logging(&config);

    let mut station = WeatherStation::new();
    match &config.script {
        Some(path) => {
            let readings = script::load_script(path)
                .with_context(|| format!("can't load measurement script {}", path.display()))?;
            replay(&mut station, &config, &readings).await;
        }
        None => run_demo(&mut station, &config),
    }

    Ok(())
}

fn init_logging(config: &Config) {
    // display output owns stdout, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level())),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn current_display(name: &str, config: &Config) -> Rc<dyn IObserver> {
    Rc::new(CurrentConditionsDisplay::new(name, config.timestamps))
}

// the scripted run: two displays, one removed explicitly, one dropped by
// its owner without being removed
fn run_demo(station: &mut WeatherStation, config: &Config) {
    let display1 = current_display("Display 1", config);
    let display2 = current_display("Display 2", config);
    let display3 = current_display("Display 3", config);
    let stats: Option<Rc<dyn IObserver>> = config
        .stats
        .then(|| Rc::new(StatisticsDisplay::new("Statistics")) as Rc<dyn IObserver>);

    station.register_observer(&display1);
    station.register_observer(&display2);
    station.register_observer(&display3);
    if let Some(s) = &stats {
        station.register_observer(s);
    }

    station.set_measurements(25.5, 60.0, 1013.2);
    station.set_measurements(24.8, 58.0, 1014.5);

    station.remove_observer(&display1);
    drop(display3);

    station.set_measurements(23.3, 55.0, 1015.0);

    info!(observers = station.observer_count(), "demo finished");
}

async fn replay(station: &mut WeatherStation, config: &Config, readings: &[Measurement]) {
    let mut observers = vec![
        current_display("Display 1", config),
        current_display("Display 2", config),
    ];
    if config.stats {
        observers.push(Rc::new(StatisticsDisplay::new("Statistics")));
    }
    for o in observers.iter() {
        station.register_observer(o);
    }

    info!(
        readings = readings.len(),
        interval_ms = config.interval_ms,
        "replaying measurement script"
    );

    // first tick completes immediately
    let mut ticker = tokio::time::interval(config.interval());
    for m in readings {
        ticker.tick().await;
        station.set_measurements(m.temperature, m.humidity, m.pressure);
    }

    info!("replay finished");
}
