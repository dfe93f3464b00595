//! Canonical event names for structured logging
//!
//! Every lifecycle event carries `event = <one of these>`.

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
