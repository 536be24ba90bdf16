use crate::core::data::complex::Complex;
use crate::core::data::iteration_point::IterationPoint;

/// Observer for a single escape-time trial. The driver invokes listeners
/// synchronously, in registration order, with no queueing:
///
/// - `on_start` once per trial, after the point is initialised;
/// - `on_iteration` once per step with the newly computed z, before the
///   point's counters and extremes have absorbed that step;
/// - `on_completed` once, with the terminally classified point.
///
/// Every method has an empty default so a listener only overrides the
/// events it aggregates.
pub trait IterationListener {
    fn on_start(&mut self, _point: &IterationPoint) {}

    fn on_iteration(&mut self, _z: Complex, _point: &IterationPoint) {}

    fn on_completed(&mut self, _point: &IterationPoint) {}
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Records the event sequence so tests can assert broadcast order.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingListener {
        pub(crate) events: Vec<String>,
    }

    impl IterationListener for RecordingListener {
        fn on_start(&mut self, point: &IterationPoint) {
            self.events.push(format!("start {}", point.current()));
        }

        fn on_iteration(&mut self, z: Complex, _point: &IterationPoint) {
            self.events.push(format!("step {}", z));
        }

        fn on_completed(&mut self, point: &IterationPoint) {
            self.events
                .push(format!("done {}", point.classification()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingListener;
    use super::*;
    use crate::core::data::point::Point;

    #[test]
    fn test_default_methods_are_no_ops() {
        struct Inert;
        impl IterationListener for Inert {}

        let point = IterationPoint::new(Point { x: 0, y: 0 }, Complex::ZERO);
        let mut listener = Inert;

        listener.on_start(&point);
        listener.on_iteration(Complex::ONE, &point);
        listener.on_completed(&point);
    }

    #[test]
    fn test_recording_listener_captures_event_order() {
        let point = IterationPoint::new(Point { x: 0, y: 0 }, Complex::ZERO);
        let mut listener = RecordingListener::default();

        listener.on_start(&point);
        listener.on_iteration(Complex::new(1.0, 0.0), &point);
        listener.on_completed(&point);

        assert_eq!(
            listener.events,
            vec!["start 0+0i", "step 1+0i", "done unresolved"]
        );
    }
}
