//! # Adapters Layer (Hexagonal Architecture)

mod recording_navigator;

pub use recording_navigator::RecordingNavigator;
