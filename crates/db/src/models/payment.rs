//! Payment session model.

use reelhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A checkout payment session row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PaymentSession {
    pub id: DbId,
    pub session_uuid: Uuid,
    pub user_id: DbId,
    pub plan: String,
    pub amount_cents: i32,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for creating a payment session.
#[derive(Debug)]
pub struct CreatePaymentSession {
    pub session_uuid: Uuid,
    pub user_id: DbId,
    pub plan: String,
    pub amount_cents: i32,
}
