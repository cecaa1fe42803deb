use serde::{Deserialize, Serialize};

use crate::domain::types::{RecordStatus, normalize_email, normalize_optional};

/// A customer record as returned by `GET /api/clientes`.
///
/// Field names follow the API's wire spelling; optional contact fields may
/// be absent on older records.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "cpf_cnpj", default)]
    pub tax_id: Option<String>,
    #[serde(rename = "endereco", default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
}

/// Payload for `POST /api/clientes`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewClient {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[serde(rename = "cpf_cnpj")]
    pub tax_id: Option<String>,
    #[serde(rename = "endereco")]
    pub address: Option<String>,
    pub status: RecordStatus,
}

impl NewClient {
    #[must_use]
    pub fn new(
        name: String,
        email: Option<String>,
        phone: Option<String>,
        tax_id: Option<String>,
        address: Option<String>,
        status: RecordStatus,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: normalize_email(email),
            phone: normalize_optional(phone),
            tax_id: normalize_optional(tax_id),
            address: normalize_optional(address),
            status,
        }
    }
}

/// Payload for `PUT /api/clientes/{id}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateClient {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[serde(rename = "cpf_cnpj")]
    pub tax_id: Option<String>,
    #[serde(rename = "endereco")]
    pub address: Option<String>,
    pub status: RecordStatus,
}

impl UpdateClient {
    #[must_use]
    pub fn new(
        name: String,
        email: Option<String>,
        phone: Option<String>,
        tax_id: Option<String>,
        address: Option<String>,
        status: RecordStatus,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: normalize_email(email),
            phone: normalize_optional(phone),
            tax_id: normalize_optional(tax_id),
            address: normalize_optional(address),
            status,
        }
    }
}
