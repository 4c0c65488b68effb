//! Korastats upstream integration: request execution, envelope
//! unwrapping, and the read models the formatters consume.

pub mod client;
pub mod envelope;
pub mod models;

pub use client::KorastatsClient;
pub use envelope::{Envelope, UnwrapStrategy};
