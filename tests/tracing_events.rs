//! Failure events emitted with the `tracing` feature enabled.

use std::fmt;
use std::sync::{Arc, Mutex};

use slotted::{BoundedVec, Expected};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Debug)]
struct Captured {
    target: String,
    level: Level,
    fields: Vec<(String, String)>,
}

impl Captured {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<Captured>>>);

struct FieldCollector<'a>(&'a mut Vec<(String, String)>);

impl Visit for FieldCollector<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}

impl<S: Subscriber> Layer<S> for Capture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Vec::new();
        event.record(&mut FieldCollector(&mut fields));
        self.0.lock().unwrap().push(Captured {
            target: event.metadata().target().to_string(),
            level: *event.metadata().level(),
            fields,
        });
    }
}

#[test]
fn test_each_failure_emits_one_debug_event() {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());

    tracing::subscriber::with_default(subscriber, || {
        let mut vec: BoundedVec<u8, 2> = BoundedVec::try_from([1, 2]).unwrap();
        assert!(vec.push_back(3).is_err());
        assert!(vec.at(7).is_err());
        vec.clear();
        assert!(vec.pop_back().is_err());
        assert!(BoundedVec::<u8, 2>::try_from([1, 2, 3]).is_err());
        assert!(BoundedVec::<u8, 2>::try_from(&[1, 2, 3][..]).is_err());

        let e: Expected<u8, String> = Expected::make_error("bad".to_string());
        assert!(e.value().is_err());

        // Successful calls stay silent.
        let ok: Expected<u8, String> = 5.into();
        assert_eq!(ok.value(), Ok(&5));
        vec.push_back(1).unwrap();
    });

    let events = capture.0.lock().unwrap();
    assert_eq!(events.len(), 6, "{events:#?}");
    assert!(events
        .iter()
        .all(|e| e.target == "slotted" && e.level == Level::DEBUG));

    assert_eq!(events[0].field("capacity"), Some("2"));
    assert_eq!(events[1].field("index"), Some("7"));
    assert_eq!(events[1].field("len"), Some("2"));
    assert_eq!(events[2].field("message"), Some("pop on empty bounded vector"));
    assert_eq!(events[3].field("len"), Some("3"));
    assert_eq!(events[4].field("len"), Some("3"));
    assert_eq!(events[5].field("requested"), Some("value"));
    assert_eq!(events[5].field("active"), Some("error"));
}
