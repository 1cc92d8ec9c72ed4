//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implementations of the auth API and identity provider ports.

mod http_api;
mod mock_api;

pub use http_api::{
    error_for_status, prepare_headers, BodyEncoding, HttpAuthApi, BINDING_PATH,
    GOOGLE_LOGIN_PATH, WALLET_LOGIN_PATH,
};
pub use mock_api::{ApiCall, MockAuthApi, MockGoogleIdentity};
