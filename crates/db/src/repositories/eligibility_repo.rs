//! Read-only lookups against the upstream enrollment/ticket tables.

use async_trait::async_trait;
use convene_core::error::CoreError;
use convene_core::model::{Enrollment, Ticket};
use convene_core::store::EligibilityStore;
use convene_core::types::DbId;

use crate::models::eligibility::{EnrollmentRow, TicketRow};
use crate::repositories::storage_error;
use crate::DbPool;

/// Enrollment and ticket lookups used only for the booking admission check.
pub struct EligibilityRepo {
    pool: DbPool,
}

impl EligibilityRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EligibilityStore for EligibilityRepo {
    async fn find_enrollment_by_user(
        &self,
        user_id: DbId,
    ) -> Result<Option<Enrollment>, CoreError> {
        let row =
            sqlx::query_as::<_, EnrollmentRow>("SELECT id, user_id FROM enrollments WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(storage_error)?;
        Ok(row.map(Enrollment::from))
    }

    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: DbId,
    ) -> Result<Option<Ticket>, CoreError> {
        let row = sqlx::query_as::<_, TicketRow>(
            "SELECT t.id, t.enrollment_id, t.status,
                    tt.id AS ticket_type_id, tt.name AS ticket_type_name,
                    tt.price, tt.is_remote, tt.includes_hotel
             FROM tickets t
             JOIN ticket_types tt ON tt.id = t.ticket_type_id
             WHERE t.enrollment_id = $1",
        )
        .bind(enrollment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;
        row.map(Ticket::try_from).transpose()
    }
}
