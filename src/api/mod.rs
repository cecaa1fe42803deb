//! REST API client: per-entity traits, the reqwest implementation and the
//! response envelope normalization.
//!
//! The traits are the seam the controllers depend on; [`HttpApi`] is the one
//! concrete backend. Tests substitute mocks or an in-process fake.

mod envelope;
mod errors;
mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use errors::{ApiError, ApiResult};
pub use http::HttpApi;

use async_trait::async_trait;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::sale::{NewSale, Sale, UpdateSale};
use crate::domain::user::{NewUser, UpdateUser, User};

/// Query parameters accepted by every collection endpoint.
///
/// Parameters are only sent when set; the server ignores the ones it does
/// not understand, so the same shape serves every resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub tipo: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into().trim().to_string();
        self.search = Some(term).filter(|t| !t.is_empty());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        let status = status.into();
        self.status = Some(status).filter(|s| !s.is_empty());
        self
    }

    pub fn tipo(mut self, tipo: impl Into<String>) -> Self {
        let tipo = tipo.into();
        self.tipo = Some(tipo).filter(|t| !t.is_empty());
        self
    }

    pub fn paginate(mut self, page: usize, limit: usize) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(status) = &self.status {
            params.push(("status", status.clone()));
        }
        if let Some(tipo) = &self.tipo {
            params.push(("tipo", tipo.clone()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

#[async_trait]
pub trait ClientApi {
    async fn list_clients(&self, query: ListQuery) -> ApiResult<Vec<Client>>;
    async fn create_client(&self, new_client: &NewClient) -> ApiResult<Client>;
    async fn update_client(&self, id: i64, updates: &UpdateClient) -> ApiResult<Client>;
    async fn delete_client(&self, id: i64) -> ApiResult<()>;
}

#[async_trait]
pub trait ProductApi {
    async fn list_products(&self, query: ListQuery) -> ApiResult<Vec<Product>>;
    async fn create_product(&self, new_product: &NewProduct) -> ApiResult<Product>;
    async fn update_product(&self, id: i64, updates: &UpdateProduct) -> ApiResult<Product>;
    async fn delete_product(&self, id: i64) -> ApiResult<()>;
}

#[async_trait]
pub trait SaleApi {
    async fn list_sales(&self, query: ListQuery) -> ApiResult<Vec<Sale>>;
    async fn create_sale(&self, new_sale: &NewSale) -> ApiResult<Sale>;
    async fn update_sale(&self, id: i64, updates: &UpdateSale) -> ApiResult<Sale>;
    async fn delete_sale(&self, id: i64) -> ApiResult<()>;
}

#[async_trait]
pub trait UserApi {
    async fn list_users(&self, query: ListQuery) -> ApiResult<Vec<User>>;
    async fn create_user(&self, new_user: &NewUser) -> ApiResult<User>;
    async fn update_user(&self, id: i64, updates: &UpdateUser) -> ApiResult<User>;
    async fn delete_user(&self, id: i64) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_skips_blank_values() {
        let query = ListQuery::new().search("  ").status("").paginate(2, 10);
        let params = query.to_params();
        assert_eq!(
            params,
            vec![("page", "2".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn list_query_trims_search_terms() {
        let query = ListQuery::new().search("  maria  ");
        assert_eq!(query.search.as_deref(), Some("maria"));
    }
}
