//! radar-core
//!
//! Contracts and pure helpers shared across the country-radar ecosystem.
//!
//! - `provider`: the `Provider` capability trait every upstream adapter implements.
//! - `country`: the built-in registry resolving free-text names to ISO codes.
//! - `normalize`: frequency normalisation (YoY transforms, daily→monthly
//!   compression, timeliness and recency checks).
//!
//! Nothing here performs I/O; adapters live in `radar-providers` and the
//! orchestrator in `radar`.
#![warn(missing_docs)]

/// Built-in country registry.
pub mod country;
mod iso3166;
/// Frequency normalisation helpers.
pub mod normalize;
/// The `Provider` trait.
pub mod provider;

pub use country::CountryRegistry;
pub use provider::Provider;
pub use radar_types::*;
