//! HTTP Basic authentication.
//!
//! Credential checking goes through the [`CredentialValidator`] trait so a
//! real credential store can be substituted without touching the handlers.

pub mod basic;
pub mod config;

pub use basic::{basic_auth_middleware, BasicAuth, CredentialValidator, StaticCredentials};
pub use config::AuthConfig;
