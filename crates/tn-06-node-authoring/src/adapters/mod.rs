//! # Adapters Layer (Hexagonal Architecture)

mod simulated_submitter;

pub use simulated_submitter::SimulatedSubmitter;
