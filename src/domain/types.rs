//! Closed enums shared by the domain entities.
//!
//! Every record carries a status drawn from a small closed set of wire
//! strings. The enums keep the API's spelling on the wire while the rest of
//! the crate works with typed variants. `parse_filter` maps UI dropdown
//! values into an optional constraint: the empty string and the `todos`
//! sentinel both mean "no constraint".

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Activation status used by clients, products and users.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RecordStatus {
    #[default]
    #[serde(rename = "Ativo")]
    Active,
    #[serde(rename = "Inativo")]
    Inactive,
}

impl RecordStatus {
    /// Wire/display string, as the API spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordStatus::Active => "Ativo",
            RecordStatus::Inactive => "Inativo",
        }
    }

    /// Parses a UI filter value into an optional constraint.
    pub fn parse_filter(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ativo" => Some(RecordStatus::Active),
            "inativo" => Some(RecordStatus::Inactive),
            _ => None,
        }
    }
}

impl Display for RecordStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a sale.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SaleStatus {
    #[default]
    #[serde(rename = "Pendente")]
    Pending,
    #[serde(rename = "Concluída")]
    Completed,
    #[serde(rename = "Cancelada")]
    Cancelled,
}

impl SaleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SaleStatus::Pending => "Pendente",
            SaleStatus::Completed => "Concluída",
            SaleStatus::Cancelled => "Cancelada",
        }
    }

    /// Parses a UI filter value into an optional constraint.
    pub fn parse_filter(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pendente" => Some(SaleStatus::Pending),
            "concluída" | "concluida" => Some(SaleStatus::Completed),
            "cancelada" => Some(SaleStatus::Cancelled),
            _ => None,
        }
    }
}

impl Display for SaleStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access profile of a dashboard user.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserRole {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "vendedor")]
    Seller,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Seller => "vendedor",
        }
    }

    /// Display label shown in tables and cards.
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Admin => "Administrador",
            UserRole::Seller => "Vendedor",
        }
    }

    /// Parses a UI filter value into an optional constraint.
    pub fn parse_filter(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "admin" => Some(UserRole::Admin),
            "vendedor" => Some(UserRole::Seller),
            _ => None,
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trims a free-text field, dropping it entirely when empty.
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Trims and lowercases an email, dropping it entirely when empty.
pub(crate) fn normalize_email(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_wire_strings() {
        let parsed: RecordStatus = serde_json::from_str("\"Inativo\"").unwrap();
        assert_eq!(parsed, RecordStatus::Inactive);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"Inativo\"");
    }

    #[test]
    fn filter_sentinels_mean_no_constraint() {
        assert_eq!(RecordStatus::parse_filter(""), None);
        assert_eq!(RecordStatus::parse_filter("todos"), None);
        assert_eq!(RecordStatus::parse_filter(" Ativo "), Some(RecordStatus::Active));
        assert_eq!(SaleStatus::parse_filter("concluida"), Some(SaleStatus::Completed));
        assert_eq!(UserRole::parse_filter("todos"), None);
    }
}
