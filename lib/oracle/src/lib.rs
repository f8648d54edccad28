//! The polling/delivery engine: owns the index cursor, paces lookups against
//! the proof source and hands completed proofs to the delivery sink.

pub mod config;
mod engine;
mod metrics;
mod sink;

pub use config::OracleConfig;
pub use engine::PollingOracle;
pub use sink::{DeliveryError, HttpProofStore, ProofSink};
