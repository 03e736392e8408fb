//! Agent marketplace support responder.

pub mod config;
pub mod error;
pub mod support;
