//! Client side of the Story Spoiler acceptance harness.
//!
//! Provides:
//! - Configuration (`SpoilerConfig`) loaded from TOML and `SPOILER_*` env vars
//! - Login (`Authenticator`) producing a bearer token
//! - An authenticated `StoryClient` for the create/edit/list/delete endpoints

#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        clippy::missing_errors_doc,
        reason = "Allow for tests"
    )
)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use auth::Authenticator;
pub use client::{ApiReply, StoryClient};
pub use config::{ApiConfig, Credentials, SpoilerConfig};
pub use error::{Error, Result};
pub use models::{ApiResponseDto, StoryDto};

// Re-export for status comparisons in downstream crates
pub use reqwest::StatusCode;
