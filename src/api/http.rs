use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::DashboardConfig;
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::sale::{NewSale, Sale, UpdateSale};
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::store::{LocalStore, Session};

use super::envelope;
use super::errors::{ApiError, ApiResult};
use super::{ClientApi, ListQuery, ProductApi, SaleApi, UserApi};

/// Reqwest-backed implementation of the entity API traits.
///
/// Every request carries the bearer token from the shared session store when
/// one is present. A failed request is surfaced to the caller immediately;
/// there are no retries.
pub struct HttpApi<S: LocalStore> {
    http: HttpClient,
    base_url: String,
    session: Session<S>,
}

impl<S: LocalStore> Clone for HttpApi<S> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            session: self.session.clone(),
        }
    }
}

impl<S: LocalStore> HttpApi<S> {
    pub fn new(config: &DashboardConfig, session: Session<S>) -> ApiResult<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut request = self.http.request(method, url);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Maps status codes and decodes the body; the single funnel every
    /// request goes through.
    async fn read_body(response: Response) -> ApiResult<Value> {
        let status = response.status();
        let text = response.text().await?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: envelope::error_message(&text, status),
            });
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|err| ApiError::InvalidResponse(err.to_string()))
    }

    async fn get_collection<T: DeserializeOwned>(
        &self,
        path: &str,
        field: &str,
        query: &ListQuery,
    ) -> ApiResult<Vec<T>> {
        let response = self
            .request(Method::GET, path)
            .query(&query.to_params())
            .send()
            .await?;
        envelope::unwrap_collection(Self::read_body(response).await?, field)
    }

    async fn post_record<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        field: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        envelope::unwrap_record(Self::read_body(response).await?, field)
    }

    async fn put_record<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        field: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        envelope::unwrap_record(Self::read_body(response).await?, field)
    }

    async fn delete_record(&self, path: &str) -> ApiResult<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::read_body(response).await.map(|_| ())
    }
}

#[async_trait]
impl<S: LocalStore> ClientApi for HttpApi<S> {
    async fn list_clients(&self, query: ListQuery) -> ApiResult<Vec<Client>> {
        self.get_collection("api/clientes", "clientes", &query).await
    }

    async fn create_client(&self, new_client: &NewClient) -> ApiResult<Client> {
        self.post_record("api/clientes", "cliente", new_client).await
    }

    async fn update_client(&self, id: i64, updates: &UpdateClient) -> ApiResult<Client> {
        self.put_record(&format!("api/clientes/{id}"), "cliente", updates)
            .await
    }

    async fn delete_client(&self, id: i64) -> ApiResult<()> {
        self.delete_record(&format!("api/clientes/{id}")).await
    }
}

#[async_trait]
impl<S: LocalStore> ProductApi for HttpApi<S> {
    async fn list_products(&self, query: ListQuery) -> ApiResult<Vec<Product>> {
        self.get_collection("api/produtos", "produtos", &query).await
    }

    async fn create_product(&self, new_product: &NewProduct) -> ApiResult<Product> {
        self.post_record("api/produtos", "produto", new_product).await
    }

    async fn update_product(&self, id: i64, updates: &UpdateProduct) -> ApiResult<Product> {
        self.put_record(&format!("api/produtos/{id}"), "produto", updates)
            .await
    }

    async fn delete_product(&self, id: i64) -> ApiResult<()> {
        self.delete_record(&format!("api/produtos/{id}")).await
    }
}

#[async_trait]
impl<S: LocalStore> SaleApi for HttpApi<S> {
    async fn list_sales(&self, query: ListQuery) -> ApiResult<Vec<Sale>> {
        self.get_collection("api/vendas", "vendas", &query).await
    }

    async fn create_sale(&self, new_sale: &NewSale) -> ApiResult<Sale> {
        self.post_record("api/vendas", "venda", new_sale).await
    }

    async fn update_sale(&self, id: i64, updates: &UpdateSale) -> ApiResult<Sale> {
        self.put_record(&format!("api/vendas/{id}"), "venda", updates)
            .await
    }

    async fn delete_sale(&self, id: i64) -> ApiResult<()> {
        self.delete_record(&format!("api/vendas/{id}")).await
    }
}

#[async_trait]
impl<S: LocalStore> UserApi for HttpApi<S> {
    async fn list_users(&self, query: ListQuery) -> ApiResult<Vec<User>> {
        self.get_collection("api/usuarios", "usuarios", &query).await
    }

    async fn create_user(&self, new_user: &NewUser) -> ApiResult<User> {
        self.post_record("api/usuarios", "usuario", new_user).await
    }

    async fn update_user(&self, id: i64, updates: &UpdateUser) -> ApiResult<User> {
        self.put_record(&format!("api/usuarios/{id}"), "usuario", updates)
            .await
    }

    async fn delete_user(&self, id: i64) -> ApiResult<()> {
        self.delete_record(&format!("api/usuarios/{id}")).await
    }
}
