use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::domain::types::SaleStatus;

/// A sale as returned by `GET /api/vendas`.
///
/// The `data` field keeps the server's raw string: endpoints emit it in
/// several formats (day-first Brazilian dates, ISO, with or without time),
/// so parsing is deferred to [`Sale::date_parsed`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    pub id: i64,
    #[serde(rename = "cliente_id")]
    pub client_id: i64,
    #[serde(rename = "cliente_nome", default)]
    pub client_name: Option<String>,
    pub total: f64,
    #[serde(rename = "data", default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: SaleStatus,
}

impl Sale {
    /// Parses the raw wire date, `None` when absent or in an unknown format.
    pub fn date_parsed(&self) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(dates::parse_flexible)
    }
}

/// Payload for `POST /api/vendas`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewSale {
    #[serde(rename = "cliente_id")]
    pub client_id: i64,
    pub total: f64,
    #[serde(rename = "data")]
    pub date: Option<String>,
    pub status: SaleStatus,
}

/// Payload for `PUT /api/vendas/{id}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateSale {
    #[serde(rename = "cliente_id")]
    pub client_id: i64,
    pub total: f64,
    #[serde(rename = "data")]
    pub date: Option<String>,
    pub status: SaleStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_date_parses_mixed_formats() {
        let mut sale: Sale = serde_json::from_str(
            r#"{"id": 1, "cliente_id": 2, "total": 10.0, "data": "15/03/2024"}"#,
        )
        .unwrap();
        assert!(sale.date_parsed().is_some());

        sale.date = Some("2024-03-15T08:30:00".to_string());
        assert!(sale.date_parsed().is_some());

        sale.date = Some("ontem".to_string());
        assert_eq!(sale.date_parsed(), None);

        sale.date = None;
        assert_eq!(sale.date_parsed(), None);
    }
}
