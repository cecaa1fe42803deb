use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::domain::types::RecordStatus;

/// Form data for creating or editing a product.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1, message = "nome é obrigatório"))]
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 0.0, message = "preço não pode ser negativo"))]
    pub price: f64,
    pub stock: u32,
    #[serde(default)]
    pub status: RecordStatus,
}

impl From<&ProductForm> for NewProduct {
    fn from(form: &ProductForm) -> Self {
        NewProduct::new(
            form.name.clone(),
            form.description.clone(),
            form.category.clone(),
            form.price,
            form.stock,
            form.status,
        )
    }
}

impl From<&ProductForm> for UpdateProduct {
    fn from(form: &ProductForm) -> Self {
        UpdateProduct::new(
            form.name.clone(),
            form.description.clone(),
            form.category.clone(),
            form.price,
            form.stock,
            form.status,
        )
    }
}
