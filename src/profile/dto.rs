use serde::Serialize;

use crate::profile::repo_types::ProfileFields;

/// Public part of the profile returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicProfile {
    pub email: String,
    pub name: String,
    pub stack: String,
}

impl From<ProfileFields> for PublicProfile {
    fn from(f: ProfileFields) -> Self {
        Self {
            email: f.email,
            name: f.name,
            stack: f.stack,
        }
    }
}

/// Response body of `GET /me`.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub status: &'static str, // always "success"
    pub user: PublicProfile,
    pub timestamp: String, // ISO-8601, millisecond precision, UTC
    pub fact: String,
}
