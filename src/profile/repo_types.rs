use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Profile row in the database.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRecord {
    pub id: Uuid,                   // primary key
    pub email: String,              // unique, natural identifier
    pub name: String,               // display name
    pub stack: String,              // technology label
    pub created_at: OffsetDateTime, // set once on insert
    pub updated_at: OffsetDateTime, // refreshed on update
}

/// The user-facing triple of a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFields {
    pub email: String,
    pub name: String,
    pub stack: String,
}

impl From<ProfileRecord> for ProfileFields {
    fn from(r: ProfileRecord) -> Self {
        Self {
            email: r.email,
            name: r.name,
            stack: r.stack,
        }
    }
}
