//! # TN-06 Node Authoring
//!
//! The add/edit node page: form state, input/output handle editing,
//! validation, preview and submission as a published node or a draft.
//!
//! **Component ID:** 06
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Submission Flow
//!
//! ```text
//! submit(mode) ──► validate ──✗──► "Validation Error" notice
//!                     │
//!                     ▼
//!              NodeSubmitter::submit ──✗──► "Error" notice
//!                     │
//!                     ▼
//!      "Node Published" | "Draft Saved" notice ──► /dashboard
//! ```
//!
//! The loading flag is cleared on every path.
//!
//! ## Module Structure
//!
//! ```text
//! tn-06-node-authoring/
//! ├── domain/      # NodeForm, SubmitMode, AuthoringConfig, errors
//! ├── ports/       # NodeSubmitter
//! ├── adapters/    # SimulatedSubmitter
//! └── editor       # NodeEditor
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod editor;
pub mod ports;

// Re-exports
pub use adapters::SimulatedSubmitter;
pub use domain::{
    parse_price, parse_tags, AuthoringConfig, AuthoringError, HandleList, InputField, NodeForm,
    NodePreview, OutputField, SubmitMode, DEFAULT_VERSION,
};
pub use editor::NodeEditor;
pub use ports::NodeSubmitter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
