use core::fmt;

use crate::kind::Kind;

/**
An error constructing a telemetry event.

Construction either produces a fully valid event or one of these; there's
no partially-built state to recover.
*/
#[derive(Debug)]
pub enum Error {
    /**
    The event was constructed without a body.
    */
    MissingBody,
    /**
    The body's self-reported kind doesn't permit its variant name.
    */
    BodyMismatch { kind: Kind, name: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingBody => f.write_str("telemetry event is missing a body"),
            Error::BodyMismatch { kind, name } => {
                write!(f, "body `{}` is not a valid `{}` payload", name, kind)
            }
        }
    }
}

impl std::error::Error for Error {}
