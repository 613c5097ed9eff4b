//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the binary.

use async_trait::async_trait;

use crate::error::RecommendError;
use crate::models::{Property, PropertyDraft, RentalRequest, User, UserPreferences};

/// Device-scoped key/value persistence for the three state records.
///
/// Each record is loaded independently at startup (absent = `None`) and
/// fully overwritten on every mutation — last-write-wins, no transactional
/// coupling between the records.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait StateStore: Send + Sync {
    // Session record
    async fn load_user(&self) -> anyhow::Result<Option<User>>;
    async fn save_user(&self, user: &User) -> anyhow::Result<()>;
    /// Removes the session record entirely (logout).
    async fn clear_user(&self) -> anyhow::Result<()>;

    // Property catalog
    async fn load_properties(&self) -> anyhow::Result<Option<Vec<Property>>>;
    async fn save_properties(&self, properties: &[Property]) -> anyhow::Result<()>;

    // Rental requests
    async fn load_requests(&self) -> anyhow::Result<Option<Vec<RentalRequest>>>;
    async fn save_requests(&self, requests: &[RentalRequest]) -> anyhow::Result<()>;
}

/// Best-effort generative enrichment contract.
///
/// Implementations are stateless per call: no retry, no caching. Failures
/// are typed so the view layer can degrade to "no recommendations" or a
/// fixed fallback description without treating them as hard errors.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait Recommender: Send + Sync {
    /// Ranks at most 3 property ids from `catalog` against `preferences`.
    /// Every returned id is guaranteed to exist in `catalog`.
    async fn recommend(
        &self,
        preferences: &UserPreferences,
        catalog: &[Property],
    ) -> Result<Vec<String>, RecommendError>;

    /// Drafts a short marketing description from the partial listing form.
    async fn describe(&self, draft: &PropertyDraft) -> Result<String, RecommendError>;
}
