mod shared_tests {
    use std::sync::{Arc, Mutex};
    use std::thread;

    use crate::measurements::Measurement;
    use crate::observer::IObserver;
    use crate::shared::{SharedObserver, SharedWeatherStation};

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<Measurement>>,
    }

    impl IObserver for Recorder {
        fn update(&self, temperature: f32, humidity: f32, pressure: f32) {
            self.seen
                .lock()
                .unwrap()
                .push(Measurement::new(temperature, humidity, pressure));
        }
    }

    impl Recorder {
        fn seen(&self) -> Vec<Measurement> {
            self.seen.lock().unwrap().clone()
        }
    }

    fn recorder() -> (Arc<Recorder>, SharedObserver) {
        let r = Arc::new(Recorder::default());
        let handle: SharedObserver = r.clone();
        (r, handle)
    }

    #[test]
    fn notifies_and_removes() {
        let station = SharedWeatherStation::new();
        let (a, a_handle) = recorder();
        let (b, b_handle) = recorder();

        station.register_observer(&a_handle);
        station.register_observer(&b_handle);
        station.set_measurements(25.5, 60.0, 1013.2);

        station.remove_observer(&a_handle);
        station.set_measurements(24.8, 58.0, 1014.5);

        assert_eq!(a.seen(), vec![Measurement::new(25.5, 60.0, 1013.2)]);
        assert_eq!(
            b.seen(),
            vec![
                Measurement::new(25.5, 60.0, 1013.2),
                Measurement::new(24.8, 58.0, 1014.5),
            ]
        );
        assert_eq!(station.measurements(), Measurement::new(24.8, 58.0, 1014.5));
    }

    #[test]
    fn dropped_observer_is_pruned() {
        let station = SharedWeatherStation::new();
        let (_, a_handle) = recorder();
        let (b, b_handle) = recorder();

        station.register_observer(&a_handle);
        station.register_observer(&b_handle);
        drop(a_handle);

        station.set_measurements(23.3, 55.0, 1015.0);
        assert_eq!(station.observer_count(), 1);
        assert_eq!(b.seen().len(), 1);
    }

    #[test]
    fn duplicate_registration_is_ignored() {
        let station = SharedWeatherStation::new();
        let (a, a_handle) = recorder();

        station.register_observer(&a_handle);
        station.register_observer(&a_handle.clone());
        station.set_measurements(1.0, 2.0, 3.0);

        assert_eq!(a.seen().len(), 1);
        station.remove_observer(&a_handle);
        assert_eq!(station.observer_count(), 0);
    }

    #[test]
    fn registers_from_many_threads() {
        let station = Arc::new(SharedWeatherStation::new());
        let recorders: Vec<_> = (0..8).map(|_| recorder()).collect();

        let workers: Vec<_> = recorders
            .iter()
            .map(|(_, handle)| {
                let station = Arc::clone(&station);
                let handle = handle.clone();
                thread::spawn(move || station.register_observer(&handle))
            })
            .collect();
        for w in workers {
            w.join().unwrap();
        }

        station.set_measurements(19.0, 45.0, 1009.0);

        assert_eq!(station.observer_count(), 8);
        for (r, _) in recorders.iter() {
            assert_eq!(r.seen(), vec![Measurement::new(19.0, 45.0, 1009.0)]);
        }
    }

    #[test]
    fn publishes_from_many_threads_reach_everyone() {
        let station = Arc::new(SharedWeatherStation::new());
        let (a, a_handle) = recorder();
        let (b, b_handle) = recorder();
        station.register_observer(&a_handle);
        station.register_observer(&b_handle);

        let workers: Vec<_> = (0..4)
            .map(|i| {
                let station = Arc::clone(&station);
                thread::spawn(move || {
                    for j in 0..25 {
                        station.set_measurements(i as f32, j as f32, 1000.0);
                    }
                })
            })
            .collect();
        for w in workers {
            w.join().unwrap();
        }

        // both observers saw the same readings in the same order
        assert_eq!(a.seen().len(), 100);
        assert_eq!(a.seen(), b.seen());
    }
}
