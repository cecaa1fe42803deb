use serde::Deserialize;
use validator::Validate;

use crate::domain::client::{NewClient, UpdateClient};
use crate::domain::types::RecordStatus;

/// Form data for creating or editing a client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClientForm {
    #[validate(length(min = 1, message = "nome é obrigatório"))]
    pub name: String,
    #[validate(email(message = "email inválido"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub tax_id: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
}

impl From<&ClientForm> for NewClient {
    fn from(form: &ClientForm) -> Self {
        NewClient::new(
            form.name.clone(),
            form.email.clone(),
            form.phone.clone(),
            form.tax_id.clone(),
            form.address.clone(),
            form.status,
        )
    }
}

impl From<&ClientForm> for UpdateClient {
    fn from(form: &ClientForm) -> Self {
        UpdateClient::new(
            form.name.clone(),
            form.email.clone(),
            form.phone.clone(),
            form.tax_id.clone(),
            form.address.clone(),
            form.status,
        )
    }
}
