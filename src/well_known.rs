/*!
Property names and values with special semantics.

The `KEY_*` constants are the reserved keys an [`crate::event::Event`] owns.
Arbitrary fields under these names are shadowed by the event's own values.
*/

pub const KEY_LEVEL: &'static str = "level";
pub const KEY_TYPE: &'static str = "type";
pub const KEY_SOURCE: &'static str = "source";
pub const KEY_TIMESTAMP: &'static str = "timestamp_ms";
pub const KEY_BODY: &'static str = "body";

// In the order a serializer is expected to write them
pub const RESERVED: &[&'static str] = &[KEY_LEVEL, KEY_TYPE, KEY_SOURCE, KEY_TIMESTAMP, KEY_BODY];

pub fn is_reserved(key: &str) -> bool {
    RESERVED.contains(&key)
}

pub const LVL_DEBUG: &'static str = "debug";
pub const LVL_INFO: &'static str = "info";
pub const LVL_WARNING: &'static str = "warning";
pub const LVL_ERROR: &'static str = "error";
pub const LVL_CRITICAL: &'static str = "critical";

pub const KIND_LOG: &'static str = "log";
pub const KIND_NETWORK: &'static str = "network";
pub const KIND_DOM: &'static str = "dom";
pub const KIND_NAVIGATION: &'static str = "navigation";
pub const KIND_ERROR: &'static str = "error";
pub const KIND_MANUAL: &'static str = "manual";

pub const SRC_CLIENT: &'static str = "client";
pub const SRC_SERVER: &'static str = "server";
