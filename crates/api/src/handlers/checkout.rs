//! Handler for checkout session creation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use reelhub_core::error::CoreError;
use reelhub_core::roles::ROLE_ADMIN;
use reelhub_db::models::payment::{CreatePaymentSession, PaymentSession};
use reelhub_db::repositories::PaymentRepo;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Subscription plans and their prices in cents.
const PLAN_BASIC: (&str, i32) = ("basic", 799);
const PLAN_PREMIUM: (&str, i32) = ("premium", 1499);

/// Request body for `POST /checkout/sessions`.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub plan: String,
}

/// Response body for `POST /checkout/sessions`.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub session_id: Uuid,
    /// Hosted payment page URL for this session.
    pub checkout_url: String,
    pub amount_cents: i32,
}

/// POST /api/v1/checkout/sessions
///
/// Create a pending payment session for the given plan and return the
/// hosted checkout URL.
pub async fn create_session(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<CheckoutRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<CheckoutResponse>>)> {
    let amount_cents = match input.plan.as_str() {
        p if p == PLAN_BASIC.0 => PLAN_BASIC.1,
        p if p == PLAN_PREMIUM.0 => PLAN_PREMIUM.1,
        other => {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown plan '{other}'. Expected one of: basic, premium"
            ))));
        }
    };

    let session_uuid = Uuid::new_v4();
    let session = PaymentRepo::create(
        &state.pool,
        &CreatePaymentSession {
            session_uuid,
            user_id: user.user_id,
            plan: input.plan.clone(),
            amount_cents,
        },
    )
    .await?;

    let checkout_url = format!(
        "{}/{}",
        state.config.checkout_base_url.trim_end_matches('/'),
        session.session_uuid
    );

    tracing::info!(
        user_id = user.user_id,
        session_id = %session.session_uuid,
        plan = %session.plan,
        "Created checkout session"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CheckoutResponse {
                session_id: session.session_uuid,
                checkout_url,
                amount_cents: session.amount_cents,
            },
        }),
    ))
}

/// GET /api/v1/checkout/sessions/{session_uuid}
///
/// Look up a payment session by its public UUID. Only the session owner
/// (or an admin) may read it.
pub async fn get_session(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(session_uuid): Path<Uuid>,
) -> AppResult<Json<DataResponse<PaymentSession>>> {
    let session = PaymentRepo::find_by_uuid(&state.pool, session_uuid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No checkout session {session_uuid}")))?;

    if user.role != ROLE_ADMIN && session.user_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not have access to this checkout session".into(),
        )));
    }

    Ok(Json(DataResponse { data: session }))
}
