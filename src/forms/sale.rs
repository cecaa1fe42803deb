use serde::Deserialize;
use validator::Validate;

use crate::dates;
use crate::domain::sale::{NewSale, UpdateSale};
use crate::domain::types::SaleStatus;

use super::FormError;

/// Form data for creating or editing a sale.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaleForm {
    #[validate(range(min = 1, message = "cliente é obrigatório"))]
    pub client_id: i64,
    #[validate(range(min = 0.0, message = "total não pode ser negativo"))]
    pub total: f64,
    pub date: Option<String>,
    #[serde(default)]
    pub status: SaleStatus,
}

impl SaleForm {
    /// Runs the derive validations plus the date-format check: a date typed
    /// into the form must be in one of the accepted formats.
    pub fn validate_all(&self) -> Result<(), FormError> {
        self.validate()?;
        if let Some(date) = &self.date {
            if dates::parse_flexible(date).is_none() {
                return Err(FormError("data em formato desconhecido".to_string()));
            }
        }
        Ok(())
    }
}

impl From<&SaleForm> for NewSale {
    fn from(form: &SaleForm) -> Self {
        NewSale {
            client_id: form.client_id,
            total: form.total,
            date: form.date.clone(),
            status: form.status,
        }
    }
}

impl From<&SaleForm> for UpdateSale {
    fn from(form: &SaleForm) -> Self {
        UpdateSale {
            client_id: form.client_id,
            total: form.total,
            date: form.date.clone(),
            status: form.status,
        }
    }
}
