/*!
Telemetry event payloads.

A [`Body`] is the polymorphic payload of an event. Each implementation
self-reports the [`Kind`] it should be tagged with and a variant name used
to cross-check that tag when the event is constructed. The types in this
module cover the payload catalog monitoring backends understand; anything
else can implement [`Body`] directly and will be validated through
[`Kind::permits`]' containment rule.
*/

use core::fmt;

use crate::{
    kind::Kind,
    props::{Bag, Props},
    value::Value,
};

/**
The payload of a telemetry event.

The Display implementation is the payload's value projection: it's what a
serializer reads for the reserved `body` key.
*/
pub trait Body: fmt::Display + Send + Sync + 'static {
    fn kind(&self) -> Kind;

    fn name(&self) -> &'static str;

    fn to_value(&self) -> Value;
}

/**
A line of log output worth shipping with other telemetry.
*/
pub struct Log {
    message: String,
}

impl Log {
    pub fn new(message: impl Into<String>) -> Self {
        Log {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Body for Log {
    fn kind(&self) -> Kind {
        Kind::Log
    }

    fn name(&self) -> &'static str {
        "Log"
    }

    fn to_value(&self) -> Value {
        Value::capture_display(self)
    }
}

/**
An outbound or inbound HTTP call.
*/
pub struct Network {
    method: String,
    url: String,
    status_code: Option<u16>,
}

impl Network {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Network {
            method: method.into(),
            url: url.into(),
            status_code: None,
        }
    }

    pub fn status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)?;

        if let Some(status_code) = self.status_code {
            write!(f, " ({})", status_code)?;
        }

        Ok(())
    }
}

impl Body for Network {
    fn kind(&self) -> Kind {
        Kind::Network
    }

    fn name(&self) -> &'static str {
        "Network"
    }

    fn to_value(&self) -> Value {
        Value::capture_display(self)
    }
}

/**
A DOM element the user interacted with.
*/
pub struct Dom {
    element: String,
}

impl Dom {
    pub fn new(element: impl Into<String>) -> Self {
        Dom {
            element: element.into(),
        }
    }

    pub fn element(&self) -> &str {
        &self.element
    }
}

impl fmt::Display for Dom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.element)
    }
}

impl Body for Dom {
    fn kind(&self) -> Kind {
        Kind::Dom
    }

    fn name(&self) -> &'static str {
        "Dom"
    }

    fn to_value(&self) -> Value {
        Value::capture_display(self)
    }
}

/**
A move between two locations, like pages of a site or screens of an app.
*/
pub struct Navigation {
    from: String,
    to: String,
}

impl Navigation {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Navigation {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl Body for Navigation {
    fn kind(&self) -> Kind {
        Kind::Navigation
    }

    fn name(&self) -> &'static str {
        "Navigation"
    }

    fn to_value(&self) -> Value {
        Value::capture_display(self)
    }
}

/**
An error observed before the one being reported, kept as breadcrumb
context.
*/
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Error {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Body for Error {
    fn kind(&self) -> Kind {
        Kind::Error
    }

    fn name(&self) -> &'static str {
        "Error"
    }

    fn to_value(&self) -> Value {
        Value::capture_display(self)
    }
}

/**
A payload shaped entirely by the caller.
*/
pub struct Manual {
    props: Bag,
}

impl Manual {
    pub fn new(props: impl Props) -> Self {
        Manual {
            props: Bag::collect(props),
        }
    }

    pub fn props(&self) -> &Bag {
        &self.props
    }
}

impl fmt::Display for Manual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for (k, v) in self.props.iter() {
            if !first {
                f.write_str(", ")?;
            }

            write!(f, "{}: {}", k, v)?;
            first = false;
        }

        Ok(())
    }
}

impl Body for Manual {
    fn kind(&self) -> Kind {
        Kind::Manual
    }

    fn name(&self) -> &'static str {
        "Manual"
    }

    fn to_value(&self) -> Value {
        Value::capture_display(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bodies_report_permitted_kinds() {
        let bodies: Vec<Box<dyn Body>> = vec![
            Box::new(Log::new("hello")),
            Box::new(Network::new("GET", "https://example.com")),
            Box::new(Dom::new("#signup")),
            Box::new(Navigation::new("/home", "/checkout")),
            Box::new(Error::new("boom")),
            Box::new(Manual::new(("flow", "onboarding"))),
        ];

        for body in bodies {
            assert!(
                body.kind().permits(body.name()),
                "{} / {:?}",
                body.name(),
                body.kind()
            );
        }
    }

    #[test]
    fn network_display_includes_status() {
        let plain = Network::new("GET", "https://example.com/api");
        let with_status = Network::new("GET", "https://example.com/api").status_code(500);

        assert_eq!("GET https://example.com/api", plain.to_string());
        assert_eq!("GET https://example.com/api (500)", with_status.to_string());
    }

    #[test]
    fn manual_display_lists_fields() {
        let manual = Manual::new([("step", "2"), ("flow", "signup")]);

        assert_eq!("step: 2, flow: signup", manual.to_string());
    }
}
