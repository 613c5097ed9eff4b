//! Application state: the explicit container replacing the ambient
//! module-level state of a browser app.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::error;

use nq_core::models::{Property, RentalRequest, User};
use nq_core::seed::seed_catalog;
use nq_core::traits::{Recommender, StateStore};

/// The three persisted records, held in memory while the process runs.
///
/// Loaded once at startup (load-or-default, each record independently) and
/// written through the store on every mutation.
pub struct AppData {
    pub user: Option<User>,
    pub properties: Vec<Property>,
    pub requests: Vec<RentalRequest>,
}

impl AppData {
    /// Loads each record from the store, falling back to its default:
    /// no session, the seed catalog, an empty request list. A store read
    /// failure is logged and defaulted — startup never fails on state.
    pub async fn load_or_default(store: &dyn StateStore) -> Self {
        let user = store.load_user().await.unwrap_or_else(|err| {
            error!(%err, "failed to load session record, starting anonymous");
            None
        });
        let properties = store
            .load_properties()
            .await
            .unwrap_or_else(|err| {
                error!(%err, "failed to load property catalog, using seed data");
                None
            })
            .unwrap_or_else(seed_catalog);
        let requests = store
            .load_requests()
            .await
            .unwrap_or_else(|err| {
                error!(%err, "failed to load rental requests, starting empty");
                None
            })
            .unwrap_or_default();
        Self {
            user,
            properties,
            requests,
        }
    }
}

/// Lifecycle of the per-session recommendation call.
///
/// There is deliberately no generation guard: if inputs change while a call
/// is in flight, the last resolved response wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationState {
    /// Nothing requested yet for this session.
    Idle,
    /// A background call is in flight; the dashboard shows a busy hint.
    Pending,
    /// Ranked ids, already sanitized to the catalog.
    Ready(Vec<String>),
    /// The service failed; rendered as "no recommendations", never an error.
    Unavailable,
}

/// State shared across all workers.
pub struct AppState {
    pub store: Arc<dyn StateStore>,
    pub recommender: Arc<dyn Recommender>,
    pub data: RwLock<AppData>,
    pub recommendations: RwLock<RecommendationState>,
}

impl AppState {
    pub async fn new(store: Arc<dyn StateStore>, recommender: Arc<dyn Recommender>) -> Self {
        let data = AppData::load_or_default(store.as_ref()).await;
        Self {
            store,
            recommender,
            data: RwLock::new(data),
            recommendations: RwLock::new(RecommendationState::Idle),
        }
    }

    /// Resets the recommendation lifecycle; called when the session changes.
    pub async fn reset_recommendations(&self) {
        *self.recommendations.write().await = RecommendationState::Idle;
    }
}
