//! Core domain + application logic for the homework status bot.
//!
//! This crate is framework-agnostic. The review API and the chat transport
//! live behind ports (traits) implemented in adapter crates.

pub mod app;
pub mod config;
pub mod domain;
pub mod errors;
pub mod homework;
pub mod logging;
pub mod notifier;
pub mod poller;
pub mod ports;

pub use errors::{Error, ParseError, Result, TransportError, ValidationError};
