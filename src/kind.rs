use core::{fmt, str::FromStr};

use crate::{
    value::{FromValue, ToValue, Value},
    well_known::{KIND_DOM, KIND_ERROR, KIND_LOG, KIND_MANUAL, KIND_NAVIGATION, KIND_NETWORK},
};

/**
The payload tag of a telemetry event.

A [`Kind`] is never supplied directly to an event; it's self-reported by the
event's body, then checked against the body's variant name with
[`Kind::permits`].
*/
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Log,
    Network,
    Dom,
    Navigation,
    Error,
    Manual,
}

// The variant identifiers each kind is known to tag
const CATALOG: &[(&'static str, Kind)] = &[
    ("Log", Kind::Log),
    ("Network", Kind::Network),
    ("Dom", Kind::Dom),
    ("Navigation", Kind::Navigation),
    ("Error", Kind::Error),
    ("Manual", Kind::Manual),
];

impl Kind {
    /**
    Whether a body variant with the given name may carry this kind.

    Names in the built-in catalog map to exactly one kind. Unknown names
    (bodies defined outside this crate) are accepted whenever they contain
    the kind's token, ignoring case, so a `NetworkProbe` body can tag
    itself [`Kind::Network`] without being registered here.
    */
    pub fn permits(&self, name: &str) -> bool {
        match CATALOG.iter().find(|(known, _)| *known == name) {
            Some((_, kind)) => kind == self,
            None => name.to_ascii_lowercase().contains(self.token()),
        }
    }

    fn token(&self) -> &'static str {
        match self {
            Kind::Log => KIND_LOG,
            Kind::Network => KIND_NETWORK,
            Kind::Dom => KIND_DOM,
            Kind::Navigation => KIND_NAVIGATION,
            Kind::Error => KIND_ERROR,
            Kind::Manual => KIND_MANUAL,
        }
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Kind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for kind in [
            Kind::Log,
            Kind::Network,
            Kind::Dom,
            Kind::Navigation,
            Kind::Error,
            Kind::Manual,
        ] {
            if s.eq_ignore_ascii_case(kind.token()) {
                return Ok(kind);
            }
        }

        Err(ParseKindError {})
    }
}

#[derive(Debug)]
pub struct ParseKindError {}

impl ToValue for Kind {
    fn to_value(&self) -> Value {
        Value::capture_display(self)
    }
}

impl<'v> FromValue<'v> for Kind {
    fn from_value(value: Value<'v>) -> Option<Self> {
        value
            .downcast_ref::<Kind>()
            .copied()
            .or_else(|| value.parse())
    }
}

impl<'v> Value<'v> {
    pub fn to_kind(&self) -> Option<Kind> {
        self.downcast_ref::<Kind>()
            .copied()
            .or_else(|| self.parse())
    }
}
