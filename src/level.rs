use core::{fmt, str::FromStr};

use crate::{
    value::{FromValue, ToValue, Value},
    well_known::{LVL_CRITICAL, LVL_DEBUG, LVL_ERROR, LVL_INFO, LVL_WARNING},
};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Debug => LVL_DEBUG,
            Level::Info => LVL_INFO,
            Level::Warning => LVL_WARNING,
            Level::Error => LVL_ERROR,
            Level::Critical => LVL_CRITICAL,
        })
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(LVL_DEBUG) {
            return Ok(Level::Debug);
        }

        if s.eq_ignore_ascii_case(LVL_INFO) {
            return Ok(Level::Info);
        }

        if s.eq_ignore_ascii_case(LVL_WARNING) || s.eq_ignore_ascii_case("warn") {
            return Ok(Level::Warning);
        }

        if s.eq_ignore_ascii_case(LVL_ERROR) {
            return Ok(Level::Error);
        }

        if s.eq_ignore_ascii_case(LVL_CRITICAL) {
            return Ok(Level::Critical);
        }

        Err(ParseLevelError {})
    }
}

#[derive(Debug)]
pub struct ParseLevelError {}

impl Default for Level {
    fn default() -> Self {
        Level::Info
    }
}

impl ToValue for Level {
    fn to_value(&self) -> Value {
        Value::capture_display(self)
    }
}

impl<'v> FromValue<'v> for Level {
    fn from_value(value: Value<'v>) -> Option<Self> {
        value
            .downcast_ref::<Level>()
            .copied()
            .or_else(|| value.parse())
    }
}

impl<'v> Value<'v> {
    pub fn to_level(&self) -> Option<Level> {
        self.downcast_ref::<Level>()
            .copied()
            .or_else(|| self.parse())
    }
}
