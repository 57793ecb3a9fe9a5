//! radar-mock
//!
//! A scriptable `Provider` for tests: capabilities are declared up front,
//! answers (series, empty, failure, delay, hang) are set per country and
//! indicator through a controller, and every call is logged so tests can
//! assert that a provider was never contacted.
#![warn(missing_docs)]

mod dynamic;

pub use dynamic::{DynamicMockProvider, MockBehavior, MockController, MockProviderBuilder};
