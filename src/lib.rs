/*!
Structured telemetry events for monitoring backends.

A telemetry [`Event`] is an envelope around one observed moment of runtime
activity: a severity [`Level`], a payload [`Kind`], an originating [`Source`],
a millisecond [`Timestamp`] stamped at construction, and a polymorphic
[`Body`] carrying the payload itself. Callers can attach arbitrary extra
fields, which are merged with the reserved ones into a single deterministic
key/value enumeration for a downstream serializer to consume.

```
use telem::{body, Event, Level, Source};

let event = Event::new(
    Source::Server,
    Level::Info,
    body::Log::new("deploy finished"),
    [("region", "us-east-1")],
)?;

assert_eq!(Level::Info, event.level());
assert_eq!("deploy finished", event.body().to_string());
# Ok::<(), telem::Error>(())
```

Events are validated when they're constructed and immutable afterwards.
Delivery, batching, and wire serialization are left to the consumer of
[`Event::entries`].
*/

pub mod body;
pub mod empty;
pub mod error;
pub mod event;
pub mod key;
pub mod kind;
pub mod level;
pub mod props;
pub mod source;
pub mod timestamp;
pub mod value;
pub mod well_known;

#[doc(inline)]
pub use self::{
    body::Body,
    empty::Empty,
    error::Error,
    event::Event,
    key::{Key, ToKey},
    kind::Kind,
    level::Level,
    props::{Bag, Props},
    source::Source,
    timestamp::Timestamp,
    value::{FromValue, OwnedValue, ToValue, Value},
};
