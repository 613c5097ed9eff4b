//! # AppError
//!
//! Centralized error handling for the NestQuest ecosystem.
//! Nothing here is fatal: the worst outcome anywhere in the system is a
//! degraded (non-personalized) experience.

use thiserror::Error;

/// The primary error type for all nq-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g. a detail page for a missing listing id)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Form validation failure (required field missing, bad enum value)
    #[error("validation error: {0}")]
    Validation(String),

    /// A role-gated action attempted by the wrong role
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Infrastructure failure (state file unreadable, render failure)
    #[error("internal service error: {0}")]
    Internal(String),
}

/// A specialized Result type for NestQuest logic.
pub type Result<T> = std::result::Result<T, AppError>;

/// Failure of the external recommendation/description service.
///
/// Kept separate from [`AppError`] on purpose: the service is best-effort
/// enrichment, so callers must decide how to degrade instead of letting a
/// blanket catch conflate "service down" with "zero good matches".
#[derive(Error, Debug)]
pub enum RecommendError {
    /// No API credential configured; the feature is simply off.
    #[error("generative service not configured")]
    Unconfigured,

    /// Network or HTTP-level failure reaching the provider.
    #[error("generative service unreachable: {0}")]
    Transport(String),

    /// The provider answered with something we could not interpret.
    #[error("malformed generative response: {0}")]
    Malformed(String),

    /// The provider answered with no usable candidate text.
    #[error("empty generative response")]
    Empty,
}
