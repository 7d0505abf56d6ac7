//! # chatterly-core
//!
//! Core types and errors for the Chatterly request router: [`ChatRequest`],
//! [`HandlerKind`], [`DispatchOutcome`], the [`RouterError`] taxonomy, and
//! tracing initialization. Transport-agnostic; used by every other crate.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{Result, RouterError};
pub use logger::init_tracing;
pub use types::{ChatRequest, DispatchOutcome, HandlerKind};
