use core::{fmt, str::FromStr};

use crate::{
    value::{FromValue, ToValue, Value},
    well_known::{SRC_CLIENT, SRC_SERVER},
};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Client,
    Server,
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Source::Client => SRC_CLIENT,
            Source::Server => SRC_SERVER,
        })
    }
}

impl FromStr for Source {
    type Err = ParseSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(SRC_CLIENT) {
            return Ok(Source::Client);
        }

        if s.eq_ignore_ascii_case(SRC_SERVER) {
            return Ok(Source::Server);
        }

        Err(ParseSourceError {})
    }
}

#[derive(Debug)]
pub struct ParseSourceError {}

impl Default for Source {
    fn default() -> Self {
        Source::Server
    }
}

impl ToValue for Source {
    fn to_value(&self) -> Value {
        Value::capture_display(self)
    }
}

impl<'v> FromValue<'v> for Source {
    fn from_value(value: Value<'v>) -> Option<Self> {
        value
            .downcast_ref::<Source>()
            .copied()
            .or_else(|| value.parse())
    }
}

impl<'v> Value<'v> {
    pub fn to_source(&self) -> Option<Source> {
        self.downcast_ref::<Source>()
            .copied()
            .or_else(|| self.parse())
    }
}
