use serde::{Deserialize, Serialize};

use crate::domain::types::{RecordStatus, UserRole, normalize_email};

/// A dashboard user as returned by `GET /api/usuarios`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "tipo")]
    pub role: UserRole,
    #[serde(default)]
    pub status: RecordStatus,
}

/// Payload for `POST /api/usuarios`. The password is write-only: it never
/// appears in fetched records.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "tipo")]
    pub role: UserRole,
    #[serde(rename = "senha")]
    pub password: String,
    pub status: RecordStatus,
}

impl NewUser {
    #[must_use]
    pub fn new(
        name: String,
        email: String,
        role: UserRole,
        password: String,
        status: RecordStatus,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: normalize_email(Some(email)).unwrap_or_default(),
            role,
            password,
            status,
        }
    }
}

/// Payload for `PUT /api/usuarios/{id}`. A `None` password leaves the
/// current one unchanged.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateUser {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "tipo")]
    pub role: UserRole,
    #[serde(rename = "senha", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub status: RecordStatus,
}

impl UpdateUser {
    #[must_use]
    pub fn new(
        name: String,
        email: String,
        role: UserRole,
        password: Option<String>,
        status: RecordStatus,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: normalize_email(Some(email)).unwrap_or_default(),
            role,
            password: password.filter(|p| !p.trim().is_empty()),
            status,
        }
    }
}
