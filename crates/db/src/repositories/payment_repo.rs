//! Repository for the `payment_sessions` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::payment::{CreatePaymentSession, PaymentSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, session_uuid, user_id, plan, amount_cents, status, created_at";

/// Provides create/lookup operations for checkout payment sessions.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Insert a new pending payment session, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePaymentSession,
    ) -> Result<PaymentSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO payment_sessions (session_uuid, user_id, plan, amount_cents)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PaymentSession>(&query)
            .bind(input.session_uuid)
            .bind(input.user_id)
            .bind(&input.plan)
            .bind(input.amount_cents)
            .fetch_one(pool)
            .await
    }

    /// Find a payment session by its public UUID.
    pub async fn find_by_uuid(
        pool: &PgPool,
        session_uuid: Uuid,
    ) -> Result<Option<PaymentSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payment_sessions WHERE session_uuid = $1");
        sqlx::query_as::<_, PaymentSession>(&query)
            .bind(session_uuid)
            .fetch_optional(pool)
            .await
    }
}
