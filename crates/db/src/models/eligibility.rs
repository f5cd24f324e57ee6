//! Enrollment and ticket row models (read-only upstream data).

use convene_core::error::CoreError;
use convene_core::model::{Enrollment, Ticket, TicketStatus, TicketType};
use convene_core::types::DbId;
use sqlx::FromRow;

/// Enrollment row trimmed to the columns the booking slice reads.
#[derive(Debug, Clone, FromRow)]
pub struct EnrollmentRow {
    pub id: DbId,
    pub user_id: DbId,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Enrollment {
            id: row.id,
            user_id: row.user_id,
        }
    }
}

/// Flattened ticket-with-type join row. The `status` column is constrained
/// to `RESERVED`/`PAID` by the schema.
#[derive(Debug, Clone, FromRow)]
pub struct TicketRow {
    pub id: DbId,
    pub enrollment_id: DbId,
    pub status: String,
    pub ticket_type_id: DbId,
    pub ticket_type_name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = CoreError;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        let status = match row.status.as_str() {
            "RESERVED" => TicketStatus::Reserved,
            "PAID" => TicketStatus::Paid,
            other => {
                return Err(CoreError::Storage(format!(
                    "unknown ticket status '{other}' for ticket {}",
                    row.id
                )))
            }
        };

        Ok(Ticket {
            id: row.id,
            enrollment_id: row.enrollment_id,
            status,
            ticket_type: TicketType {
                id: row.ticket_type_id,
                name: row.ticket_type_name,
                price: row.price,
                is_remote: row.is_remote,
                includes_hotel: row.includes_hotel,
            },
        })
    }
}
