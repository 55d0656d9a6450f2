//! Request handlers, one module per resource.

pub mod alerts;
pub mod meta;
pub mod restricted;
pub mod tourists;
pub mod ws;
