/*!
The [`Event`] type.

An [`Event`] is one validated telemetry record: an origin [`Source`], a
severity [`Level`], a payload [`Body`] with its self-reported [`Kind`], a
wall-clock [`Timestamp`] stamped at construction, and any number of
caller-supplied arbitrary fields.

The reserved fields are typed; the arbitrary fields live in an
insertion-ordered [`Bag`]. [`Event::entries`] merges the two into the flat
key/value sequence a serializer consumes: the reserved keys first, in wire
order, then the arbitrary fields. An arbitrary field under a reserved name
is silently shadowed by the event's own value; the shadowed names are kept
and reported through [`Event::shadowed`] so callers can notice the
collision without the event failing.
*/

use core::{fmt, ops::ControlFlow};

use crate::{
    body::Body,
    error::Error,
    key::Key,
    kind::Kind,
    level::Level,
    props::{self, Bag, Props},
    source::Source,
    timestamp::Timestamp,
    value::{ToValue, Value},
    well_known::{KEY_BODY, KEY_LEVEL, KEY_SOURCE, KEY_TIMESTAMP, KEY_TYPE, RESERVED},
};

pub struct Event {
    level: Level,
    kind: Kind,
    source: Source,
    ts: Timestamp,
    body: Box<dyn Body>,
    props: Bag,
    shadowed: Vec<Key<'static>>,
}

impl Event {
    /**
    Assemble and validate an event.

    The timestamp is stamped from the wall clock here and isn't settable
    any other way. Arbitrary `props` are collected before the reserved
    fields take effect, so a caller-supplied value under a reserved key is
    shadowed, never the reverse.

    Fails with [`Error::MissingBody`] when `body` is `None`, and with
    [`Error::BodyMismatch`] when the body's self-reported kind doesn't
    permit its variant name.
    */
    pub fn new<B: Body>(
        source: Source,
        level: Level,
        body: impl Into<Option<B>>,
        props: impl Props,
    ) -> Result<Self, Error> {
        let Some(body) = body.into() else {
            return Err(Error::MissingBody);
        };

        let kind = body.kind();

        if !kind.permits(body.name()) {
            return Err(Error::BodyMismatch {
                kind,
                name: body.name(),
            });
        }

        let mut props = Bag::collect(props);

        let mut shadowed = Vec::new();

        for key in RESERVED {
            if props.remove(*key).is_some() {
                shadowed.push(Key::new(*key));
            }
        }

        Ok(Event {
            level,
            kind,
            source,
            ts: Timestamp::now(),
            body: Box::new(body),
            props,
            shadowed,
        })
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn timestamp(&self) -> Timestamp {
        self.ts
    }

    pub fn body(&self) -> &dyn Body {
        &*self.body
    }

    /**
    The arbitrary fields that survived the reserved-key collision check.
    */
    pub fn props(&self) -> &Bag {
        &self.props
    }

    /**
    Arbitrary keys that were dropped because the event's own fields own
    those names.
    */
    pub fn shadowed(&self) -> &[Key<'static>] {
        &self.shadowed
    }

    pub fn for_each<'kv, F: FnMut(Key<'kv>, Value<'kv>) -> ControlFlow<()>>(
        &'kv self,
        mut for_each: F,
    ) -> ControlFlow<()> {
        for_each(Key::new(KEY_LEVEL), self.level.to_value())?;
        for_each(Key::new(KEY_TYPE), self.kind.to_value())?;
        for_each(Key::new(KEY_SOURCE), self.source.to_value())?;
        for_each(Key::new(KEY_TIMESTAMP), self.ts.to_value())?;
        for_each(Key::new(KEY_BODY), self.body.to_value())?;

        self.props.for_each(for_each)
    }

    /**
    Enumerate every property of the event: the reserved keys in the order
    a serializer writes them, then the arbitrary fields in insertion
    order. Each key appears exactly once. The iterator can be recreated
    any number of times and always yields the same sequence.
    */
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            event: self,
            reserved: 0,
            props: self.props.iter(),
        }
    }
}

impl Props for Event {
    fn for_each<'kv, F: FnMut(Key<'kv>, Value<'kv>) -> ControlFlow<()>>(
        &'kv self,
        for_each: F,
    ) -> ControlFlow<()> {
        self.for_each(for_each)
    }

    fn count(&self) -> usize {
        RESERVED.len() + self.props.len()
    }

    fn is_unique(&self) -> bool {
        true
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("Event");

        let _ = self.for_each(|k, v| {
            f.field(k.as_str(), &v);

            ControlFlow::Continue(())
        });

        f.finish()
    }
}

pub struct Entries<'a> {
    event: &'a Event,
    reserved: usize,
    props: props::Iter<'a>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Key<'a>, Value<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.reserved {
            0 => (Key::new(KEY_LEVEL), self.event.level.to_value()),
            1 => (Key::new(KEY_TYPE), self.event.kind.to_value()),
            2 => (Key::new(KEY_SOURCE), self.event.source.to_value()),
            3 => (Key::new(KEY_TIMESTAMP), self.event.ts.to_value()),
            4 => (Key::new(KEY_BODY), self.event.body.to_value()),
            _ => return self.props.next(),
        };

        self.reserved += 1;

        Some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{body, empty::Empty, well_known::is_reserved};

    struct Probe {
        kind: Kind,
    }

    impl fmt::Display for Probe {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("probe")
        }
    }

    impl Body for Probe {
        fn kind(&self) -> Kind {
            self.kind
        }

        fn name(&self) -> &'static str {
            "NetworkProbe"
        }

        fn to_value(&self) -> Value {
            Value::capture_display(self)
        }
    }

    #[test]
    fn reserved_values_win_over_arbitrary_fields() {
        let event = Event::new(
            Source::Client,
            Level::Warning,
            body::Log::new("checkout failed"),
            [("level", "bogus"), ("user", "alice")],
        )
        .unwrap();

        assert_eq!(Level::Warning, event.level());
        assert_eq!(
            Some(Level::Warning),
            event.get(KEY_LEVEL).and_then(|v| v.to_level())
        );

        // The colliding key is reported, the others are kept
        assert_eq!(1, event.shadowed().len());
        assert_eq!("level", event.shadowed()[0].as_str());
        assert_eq!(Some("alice"), event.props().pull::<&str, _>("user"));
    }

    #[test]
    fn timestamps_are_monotonic_within_the_clock_window() {
        let before = Timestamp::now();

        let first = Event::new(Source::Server, Level::Info, body::Log::new("a"), Empty).unwrap();
        let second = Event::new(Source::Server, Level::Info, body::Log::new("b"), Empty).unwrap();

        let after = Timestamp::now();

        assert!(first.timestamp() <= second.timestamp());
        assert!(before <= first.timestamp());
        assert!(second.timestamp() <= after);
    }

    #[test]
    fn missing_body_is_rejected_for_every_classification() {
        for source in [Source::Client, Source::Server] {
            for level in [
                Level::Debug,
                Level::Info,
                Level::Warning,
                Level::Error,
                Level::Critical,
            ] {
                let result = Event::new(source, level, None::<body::Log>, Empty);

                assert!(matches!(result, Err(Error::MissingBody)));
            }
        }
    }

    #[test]
    fn mismatched_body_kind_is_rejected() {
        let result = Event::new(
            Source::Client,
            Level::Info,
            Probe { kind: Kind::Manual },
            Empty,
        );

        assert!(matches!(
            result,
            Err(Error::BodyMismatch {
                kind: Kind::Manual,
                name: "NetworkProbe",
            })
        ));
    }

    #[test]
    fn matching_body_kind_is_accepted() {
        let event = Event::new(
            Source::Client,
            Level::Info,
            Probe {
                kind: Kind::Network,
            },
            Empty,
        )
        .unwrap();

        assert_eq!(Kind::Network, event.kind());
        assert_eq!("NetworkProbe", event.body().name());
    }

    #[test]
    fn entries_yield_reserved_keys_then_arbitrary_fields() {
        let mut props = Bag::new();
        props.insert("user", "alice");
        props.insert("type", "shadowed");
        props.insert("attempt", 2);

        let event = Event::new(
            Source::Server,
            Level::Error,
            body::Network::new("GET", "https://example.com").status_code(503),
            props,
        )
        .unwrap();

        let keys = event
            .entries()
            .map(|(k, _)| k.to_owned())
            .collect::<Vec<_>>();

        assert_eq!(
            vec!["level", "type", "source", "timestamp_ms", "body", "user", "attempt"],
            keys
        );

        // Values line up with the typed accessors
        assert_eq!(
            Some(event.level()),
            event.get(KEY_LEVEL).and_then(|v| v.to_level())
        );
        assert_eq!(
            Some(event.kind()),
            event.get(KEY_TYPE).and_then(|v| v.to_kind())
        );
        assert_eq!(
            Some(event.source()),
            event.get(KEY_SOURCE).and_then(|v| v.to_source())
        );
        assert_eq!(
            Some(event.timestamp()),
            event.get(KEY_TIMESTAMP).and_then(|v| v.to_timestamp())
        );
        assert_eq!(
            event.body().to_string(),
            event.get(KEY_BODY).unwrap().to_string()
        );

        // Each key appears exactly once
        for key in &keys {
            let occurrences = event
                .entries()
                .filter(|(k, _)| k.as_str() == key.as_str())
                .count();

            assert_eq!(1, occurrences, "{}", key);
        }

        assert_eq!(keys.len(), event.count());
    }

    #[test]
    fn entries_are_idempotent() {
        let event = Event::new(
            Source::Client,
            Level::Debug,
            body::Manual::new(("flow", "signup")),
            [("attempt", 1)],
        )
        .unwrap();

        let first = event
            .entries()
            .map(|(k, v)| (k.to_owned(), v.to_string()))
            .collect::<Vec<_>>();
        let second = event
            .entries()
            .map(|(k, v)| (k.to_owned(), v.to_string()))
            .collect::<Vec<_>>();

        assert_eq!(first, second);
    }

    #[test]
    fn only_reserved_keys_are_shadowed() {
        let mut props = Bag::new();

        for key in RESERVED {
            props.insert(Key::new(*key), "shadowed");
        }

        props.insert("kept", true);

        let event = Event::new(
            Source::Server,
            Level::Info,
            body::Log::new("hello"),
            props,
        )
        .unwrap();

        assert_eq!(RESERVED.len(), event.shadowed().len());
        assert_eq!(1, event.props().len());

        for key in event.shadowed() {
            assert!(is_reserved(key.as_str()));
        }
    }
}
