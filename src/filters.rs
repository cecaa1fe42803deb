//! In-memory predicate engine applied to fetched collections.
//!
//! Filtering happens client-side over the records already in memory: the
//! active predicates AND together and produce a new vector, leaving the
//! original collection untouched. A record missing an optional field never
//! matches the predicate on that field.

use chrono::NaiveDate;

use crate::domain::client::Client;
use crate::domain::product::{Product, StockLevel};
use crate::domain::sale::Sale;
use crate::domain::types::{RecordStatus, SaleStatus, UserRole};
use crate::domain::user::User;

/// A conjunction of predicates over one record type.
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Applies `filter`, returning matching records in their original order.
pub fn apply<T: Clone, F: RecordFilter<T>>(records: &[T], filter: &F) -> Vec<T> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Case-insensitive substring containment over an optional field.
fn contains_term(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle))
}

/// Search and status constraints for the clients page.
#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    search: String,
    pub status: Option<RecordStatus>,
}

impl ClientFilter {
    /// Stores the free-text term trimmed and lowercased.
    pub fn set_search(&mut self, term: &str) {
        self.search = normalize_term(term);
    }

    pub fn search(&self) -> &str {
        &self.search
    }
}

impl RecordFilter<Client> for ClientFilter {
    fn matches(&self, client: &Client) -> bool {
        if let Some(status) = self.status {
            if client.status != status {
                return false;
            }
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.as_str();
        client.name.to_lowercase().contains(needle)
            || contains_term(client.email.as_deref(), needle)
            || contains_term(client.phone.as_deref(), needle)
            || contains_term(client.tax_id.as_deref(), needle)
            || client.id.to_string().contains(needle)
    }
}

/// Search, category and stock-level constraints for the products and
/// inventory pages.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    search: String,
    category: Option<String>,
    pub stock_level: Option<StockLevel>,
    pub status: Option<RecordStatus>,
}

impl ProductFilter {
    pub fn set_search(&mut self, term: &str) {
        self.search = normalize_term(term);
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Sets the category constraint; empty and `todas` mean no constraint.
    pub fn set_category(&mut self, value: &str) {
        let value = normalize_term(value);
        self.category = match value.as_str() {
            "" | "todas" | "todos" => None,
            _ => Some(value),
        };
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl RecordFilter<Product> for ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        if let Some(status) = self.status {
            if product.status != status {
                return false;
            }
        }
        if let Some(category) = &self.category {
            let matches_category = product
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase() == *category);
            if !matches_category {
                return false;
            }
        }
        if let Some(level) = self.stock_level {
            if product.stock_level() != level {
                return false;
            }
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.as_str();
        product.name.to_lowercase().contains(needle)
            || contains_term(product.description.as_deref(), needle)
            || contains_term(product.category.as_deref(), needle)
            || product.id.to_string().contains(needle)
    }
}

/// Relative date window for the sales page filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SalePeriod {
    Today,
    Last7Days,
    Last30Days,
}

impl SalePeriod {
    /// Parses a UI filter value into an optional constraint.
    pub fn parse_filter(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "hoje" => Some(SalePeriod::Today),
            "7dias" => Some(SalePeriod::Last7Days),
            "30dias" => Some(SalePeriod::Last30Days),
            _ => None,
        }
    }

    fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        if date > today {
            return false;
        }
        let age = (today - date).num_days();
        match self {
            SalePeriod::Today => age == 0,
            SalePeriod::Last7Days => age < 7,
            SalePeriod::Last30Days => age < 30,
        }
    }
}

/// Search, status and period constraints for the sales page.
///
/// The period predicate carries the reference date it was set against so the
/// filter stays a pure function of its inputs.
#[derive(Debug, Clone, Default)]
pub struct SaleFilter {
    search: String,
    pub status: Option<SaleStatus>,
    period: Option<(SalePeriod, NaiveDate)>,
}

impl SaleFilter {
    pub fn set_search(&mut self, term: &str) {
        self.search = normalize_term(term);
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_period(&mut self, period: Option<SalePeriod>, today: NaiveDate) {
        self.period = period.map(|p| (p, today));
    }

    pub fn period(&self) -> Option<SalePeriod> {
        self.period.map(|(p, _)| p)
    }
}

impl RecordFilter<Sale> for SaleFilter {
    fn matches(&self, sale: &Sale) -> bool {
        if let Some(status) = self.status {
            if sale.status != status {
                return false;
            }
        }
        if let Some((period, today)) = self.period {
            // a sale with no parseable date never matches a period filter
            let Some(date) = sale.date_parsed() else {
                return false;
            };
            if !period.contains(date.date(), today) {
                return false;
            }
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.as_str();
        contains_term(sale.client_name.as_deref(), needle)
            || sale.id.to_string().contains(needle)
            || sale.client_id.to_string().contains(needle)
    }
}

/// Search, role and status constraints for the users page.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    search: String,
    pub role: Option<UserRole>,
    pub status: Option<RecordStatus>,
}

impl UserFilter {
    pub fn set_search(&mut self, term: &str) {
        self.search = normalize_term(term);
    }

    pub fn search(&self) -> &str {
        &self.search
    }
}

impl RecordFilter<User> for UserFilter {
    fn matches(&self, user: &User) -> bool {
        if let Some(role) = self.role {
            if user.role != role {
                return false;
            }
        }
        if let Some(status) = self.status {
            if user.status != status {
                return false;
            }
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.as_str();
        user.name.to_lowercase().contains(needle)
            || user.email.to_lowercase().contains(needle)
            || user.id.to_string().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: i64, name: &str, email: Option<&str>) -> Client {
        Client {
            id,
            name: name.to_string(),
            email: email.map(str::to_string),
            phone: None,
            tax_id: None,
            address: None,
            status: RecordStatus::Active,
        }
    }

    #[test]
    fn empty_filter_is_identity() {
        let records = vec![
            client(1, "Ana", Some("ana@example.com")),
            client(2, "Bruno", None),
        ];
        let filter = ClientFilter::default();
        assert_eq!(apply(&records, &filter), records);
    }

    #[test]
    fn search_matches_stringified_id() {
        let records = vec![client(42, "Ana", None), client(7, "Bruno", None)];
        let mut filter = ClientFilter::default();
        filter.set_search("42");
        let filtered = apply(&records, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 42);
    }

    #[test]
    fn missing_field_does_not_match_and_does_not_panic() {
        let records = vec![client(1, "Ana", None)];
        let mut filter = ClientFilter::default();
        filter.set_search("example.com");
        assert!(apply(&records, &filter).is_empty());
    }

    #[test]
    fn period_filter_uses_reference_date() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert!(SalePeriod::Today.contains(today, today));
        assert!(!SalePeriod::Today.contains(today.pred_opt().unwrap(), today));
        assert!(SalePeriod::Last7Days.contains(today - chrono::Duration::days(6), today));
        assert!(!SalePeriod::Last7Days.contains(today - chrono::Duration::days(7), today));
        assert!(SalePeriod::Last30Days.contains(today - chrono::Duration::days(29), today));
        assert!(!SalePeriod::Last30Days.contains(today - chrono::Duration::days(30), today));
    }
}
