use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::{RecordStatus, normalize_optional};

/// A catalog product as returned by `GET /api/produtos`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "estoque", default)]
    pub stock: u32,
    #[serde(default)]
    pub status: RecordStatus,
}

impl Product {
    /// Threshold bucket for the current stock count.
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_units(self.stock)
    }
}

/// Stock buckets used by the inventory filter.
///
/// Buckets are disjoint and cover every non-negative count: `0` is out,
/// `1..=5` low, `6..=10` medium, anything above is good.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StockLevel {
    Out,
    Low,
    Medium,
    Good,
}

impl StockLevel {
    pub fn from_units(units: u32) -> Self {
        match units {
            0 => StockLevel::Out,
            1..=5 => StockLevel::Low,
            6..=10 => StockLevel::Medium,
            _ => StockLevel::Good,
        }
    }

    /// Display label shown in the inventory view.
    pub fn label(self) -> &'static str {
        match self {
            StockLevel::Out => "Esgotado",
            StockLevel::Low => "Baixo",
            StockLevel::Medium => "Médio",
            StockLevel::Good => "Bom",
        }
    }

    /// CSS badge class for the bucket.
    pub fn css_class(self) -> &'static str {
        match self {
            StockLevel::Out => "estoque-esgotado",
            StockLevel::Low => "estoque-baixo",
            StockLevel::Medium => "estoque-medio",
            StockLevel::Good => "estoque-bom",
        }
    }

    /// Parses a UI filter value into an optional constraint.
    pub fn parse_filter(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "esgotado" => Some(StockLevel::Out),
            "baixo" => Some(StockLevel::Low),
            "médio" | "medio" => Some(StockLevel::Medium),
            "bom" => Some(StockLevel::Good),
            _ => None,
        }
    }
}

impl Display for StockLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Payload for `POST /api/produtos`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "estoque")]
    pub stock: u32,
    pub status: RecordStatus,
}

impl NewProduct {
    #[must_use]
    pub fn new(
        name: String,
        description: Option<String>,
        category: Option<String>,
        price: f64,
        stock: u32,
        status: RecordStatus,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            description: normalize_optional(description),
            category: normalize_optional(category),
            price,
            stock,
            status,
        }
    }
}

/// Payload for `PUT /api/produtos/{id}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateProduct {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "estoque")]
    pub stock: u32,
    pub status: RecordStatus,
}

impl UpdateProduct {
    #[must_use]
    pub fn new(
        name: String,
        description: Option<String>,
        category: Option<String>,
        price: f64,
        stock: u32,
        status: RecordStatus,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            description: normalize_optional(description),
            category: normalize_optional(category),
            price,
            stock,
            status,
        }
    }
}
