//! # nq-web Handlers
//!
//! This module coordinates the flow between HTTP requests and Core traits.
//! Every screen is server-rendered; role gating happens here, per handler,
//! as redirects rather than errors.

use actix_web::{web, HttpResponse};
use askama::Template;
use serde::Deserialize;
use tracing::{error, warn};

use nq_core::error::{AppError, RecommendError};
use nq_core::filter::{filter_catalog, TypeFacet};
use nq_core::models::{
    InquiryForm, LoginForm, Property, PropertyDraft, RentalRequest, User, UserRole,
};
use nq_ui::{
    AddPropertyTemplate, LandingTemplate, LoginTemplate, NotFoundTemplate,
    OwnerDashboardTemplate, PropertyDetailTemplate, RenterDashboardTemplate,
    DEFAULT_INQUIRY_MESSAGE,
};

use crate::error::WebError;
use crate::state::{AppData, AppState, RecommendationState};

const HTML: &str = "text/html; charset=utf-8";

/// Fixed fallback when the model answers with no usable text.
pub const DESCRIBE_EMPTY_FALLBACK: &str = "No description generated.";
/// Fixed fallback when the description call fails outright.
pub const DESCRIBE_ERROR_FALLBACK: &str = "Error generating description.";

type HandlerResult = Result<HttpResponse, WebError>;

/// Query string behind the renter dashboard's search box and facet chips.
#[derive(Debug, Deserialize)]
pub struct BrowseQuery {
    #[serde(default)]
    pub q: String,
    #[serde(rename = "type")]
    pub facet: Option<String>,
}

fn render<T: Template>(template: &T) -> Result<String, WebError> {
    template
        .render()
        .map_err(|err| WebError(AppError::Internal(err.to_string())))
}

fn page<T: Template>(template: &T) -> HandlerResult {
    Ok(HttpResponse::Ok()
        .content_type(HTML)
        .body(render(template)?))
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}

fn not_found(data: &AppData, entity: &str, id: &str) -> HandlerResult {
    let template = NotFoundTemplate {
        user: data.user.as_ref(),
        entity,
        id,
    };
    Ok(HttpResponse::NotFound()
        .content_type(HTML)
        .body(render(&template)?))
}

/// `/` — landing for visitors, dashboard for whichever role is logged in.
pub async fn index(state: web::Data<AppState>, query: web::Query<BrowseQuery>) -> HandlerResult {
    let data = state.data.read().await;
    match &data.user {
        None => page(&LandingTemplate { user: None }),
        Some(user) if user.role == UserRole::Owner => owner_dashboard(&data, user),
        Some(user) => renter_dashboard(&state, &data, user, &query).await,
    }
}

fn owner_dashboard(data: &AppData, user: &User) -> HandlerResult {
    let listings: Vec<&Property> = data
        .properties
        .iter()
        .filter(|p| p.owner_id == user.id)
        .collect();
    // Only inquiries aimed at this owner's listings are visible here.
    let inquiries: Vec<&RentalRequest> = data
        .requests
        .iter()
        .filter(|r| listings.iter().any(|p| p.id == r.property_id))
        .collect();
    page(&OwnerDashboardTemplate {
        user: Some(user),
        listings,
        inquiries,
    })
}

async fn renter_dashboard(
    state: &web::Data<AppState>,
    data: &AppData,
    user: &User,
    query: &BrowseQuery,
) -> HandlerResult {
    maybe_spawn_recommendation(state, data, user).await;

    let facet = TypeFacet::parse(query.facet.as_deref().unwrap_or("All"));
    let listings = filter_catalog(&data.properties, &query.q, facet);

    let recommendations = state.recommendations.read().await;
    let (recommended, recommending) = match &*recommendations {
        RecommendationState::Ready(ids) => {
            let hits: Vec<&Property> = ids
                .iter()
                .filter_map(|id| data.properties.iter().find(|p| p.id == *id))
                .collect();
            (hits, false)
        }
        RecommendationState::Pending => (Vec::new(), true),
        RecommendationState::Idle | RecommendationState::Unavailable => (Vec::new(), false),
    };

    page(&RenterDashboardTemplate {
        user: Some(user),
        name: &user.name,
        query: &query.q,
        chips: RenterDashboardTemplate::chips_for(facet),
        recommended,
        recommending,
        listings,
    })
}

/// Kicks off the once-per-session background recommendation call when the
/// renter carries preferences. The dashboard never waits on the result.
async fn maybe_spawn_recommendation(state: &web::Data<AppState>, data: &AppData, user: &User) {
    let Some(preferences) = user.preferences.clone() else {
        return;
    };
    {
        let mut recommendations = state.recommendations.write().await;
        if *recommendations != RecommendationState::Idle {
            return;
        }
        *recommendations = RecommendationState::Pending;
    }

    let catalog = data.properties.clone();
    let state = state.clone();
    tokio::spawn(async move {
        let outcome = state.recommender.recommend(&preferences, &catalog).await;
        // Last resolved response wins; there is no generation guard, so a
        // stale call overwriting a newer one is accepted behavior.
        let mut recommendations = state.recommendations.write().await;
        *recommendations = match outcome {
            Ok(ids) => RecommendationState::Ready(ids),
            Err(err) => {
                warn!(%err, "recommendations unavailable for this session");
                RecommendationState::Unavailable
            }
        };
    });
}

/// `GET /login` — only reachable while anonymous.
pub async fn login_page(state: web::Data<AppState>) -> HandlerResult {
    let data = state.data.read().await;
    if data.user.is_some() {
        return Ok(see_other("/"));
    }
    page(&LoginTemplate {
        user: None,
        error: None,
    })
}

/// `POST /login` — creates the session user; role is whatever was picked.
pub async fn login_submit(state: web::Data<AppState>, form: web::Form<LoginForm>) -> HandlerResult {
    let form = form.into_inner();
    if let Err(err) = form.validate() {
        let template = LoginTemplate {
            user: None,
            error: Some(err.to_string()),
        };
        return Ok(HttpResponse::BadRequest()
            .content_type(HTML)
            .body(render(&template)?));
    }

    let user = form.into_user();
    let mut data = state.data.write().await;
    if data.user.is_some() {
        return Ok(see_other("/"));
    }
    data.user = Some(user.clone());
    if let Err(err) = state.store.save_user(&user).await {
        error!(%err, "failed to persist session record");
    }
    drop(data);
    state.reset_recommendations().await;
    Ok(see_other("/"))
}

/// `POST /logout` — clears the session record entirely.
pub async fn logout(state: web::Data<AppState>) -> HandlerResult {
    let mut data = state.data.write().await;
    data.user = None;
    if let Err(err) = state.store.clear_user().await {
        error!(%err, "failed to clear session record");
    }
    drop(data);
    state.reset_recommendations().await;
    Ok(see_other("/"))
}

/// `GET /property/{id}` — open to every state; a missing id is a
/// not-found view, not a failure.
pub async fn property_detail(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> HandlerResult {
    let id = path.into_inner();
    let data = state.data.read().await;
    let Some(property) = data.properties.iter().find(|p| p.id == id) else {
        return not_found(&data, "Property", &id);
    };
    page(&PropertyDetailTemplate {
        user: data.user.as_ref(),
        property,
        sent: false,
        message: DEFAULT_INQUIRY_MESSAGE,
    })
}

/// `POST /property/{id}/inquire` — anonymous submissions bounce to the
/// login screen and create nothing; authenticated ones create exactly one
/// PENDING request.
pub async fn send_inquiry(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<InquiryForm>,
) -> HandlerResult {
    let id = path.into_inner();
    let form = form.into_inner();

    let mut data = state.data.write().await;
    let Some(user) = data.user.clone() else {
        return Ok(see_other("/login"));
    };
    let Some(property) = data.properties.iter().find(|p| p.id == id).cloned() else {
        return not_found(&data, "Property", &id);
    };
    form.validate()?;

    let request = RentalRequest::new(&property, &user, form.message);
    data.requests.insert(0, request);
    if let Err(err) = state.store.save_requests(&data.requests).await {
        error!(%err, "failed to persist rental requests");
    }

    page(&PropertyDetailTemplate {
        user: data.user.as_ref(),
        property: &property,
        sent: true,
        message: "",
    })
}

/// `GET /add-property` — owner only; everyone else goes home.
pub async fn add_property_form(state: web::Data<AppState>) -> HandlerResult {
    let data = state.data.read().await;
    let Some(user) = data.user.as_ref().filter(|u| u.role == UserRole::Owner) else {
        return Ok(see_other("/"));
    };
    let draft = PropertyDraft::default();
    page(&AddPropertyTemplate::new(Some(user), &draft, None))
}

/// `POST /add-property` — validates the draft and prepends the listing.
pub async fn add_property_submit(
    state: web::Data<AppState>,
    form: web::Form<PropertyDraft>,
) -> HandlerResult {
    let draft = form.into_inner();
    let mut data = state.data.write().await;
    let Some(owner) = data.user.clone().filter(|u| u.role == UserRole::Owner) else {
        return Ok(see_other("/"));
    };

    if let Err(err) = draft.validate() {
        let template = AddPropertyTemplate::new(data.user.as_ref(), &draft, Some(err.to_string()));
        return Ok(HttpResponse::BadRequest()
            .content_type(HTML)
            .body(render(&template)?));
    }

    let property = draft.into_property(&owner.id);
    data.properties.insert(0, property);
    if let Err(err) = state.store.save_properties(&data.properties).await {
        error!(%err, "failed to persist property catalog");
    }
    Ok(see_other("/"))
}

/// `POST /add-property/describe` — fills the draft's description from the
/// generative service, falling back to fixed text on any failure.
pub async fn describe_draft(
    state: web::Data<AppState>,
    form: web::Form<PropertyDraft>,
) -> HandlerResult {
    let mut draft = form.into_inner();
    let user = {
        let data = state.data.read().await;
        match data.user.clone().filter(|u| u.role == UserRole::Owner) {
            Some(user) => user,
            None => return Ok(see_other("/")),
        }
    };

    draft.description = match state.recommender.describe(&draft).await {
        Ok(text) => text,
        Err(RecommendError::Empty) => DESCRIBE_EMPTY_FALLBACK.to_string(),
        Err(err) => {
            warn!(%err, "description generation failed");
            DESCRIBE_ERROR_FALLBACK.to_string()
        }
    };
    page(&AddPropertyTemplate::new(Some(&user), &draft, None))
}

/// Unknown paths redirect home.
pub async fn fallback() -> HttpResponse {
    see_other("/")
}
