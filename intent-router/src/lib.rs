//! # intent-router
//!
//! Routing tables for the Chatterly dispatcher: the canned-response table,
//! the ordered keyword rule classifier, and the handler registry, plus the
//! built-in catalog ([`RouterConfig::builtin`]). All tables are immutable
//! after construction and shared read-only across concurrent requests.

pub mod canned;
pub mod catalog;
pub mod registry;
pub mod rules;

pub use canned::{CannedEntry, CannedTable};
pub use catalog::RouterConfig;
pub use registry::{HandlerDescriptor, HandlerRegistry};
pub use rules::{Classification, IntentClassifier, Rule};
