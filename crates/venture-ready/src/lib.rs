//! Scoring and classification engine for the VentureReady investment
//! readiness platform.
//!
//! The crate hosts the canonical implementations of the founder assessment
//! pipeline (answer normalization, category scoring, total aggregation,
//! cluster banding, badges, recommendations) and the independent investor
//! classification pipeline. Both are pure rule engines; AI-backed
//! enhancements are optional adapters that fall back to the deterministic
//! rules whenever the external service is unavailable.

pub mod assessment;
pub mod config;
pub mod error;
pub mod generation;
pub mod investor;
pub mod telemetry;
