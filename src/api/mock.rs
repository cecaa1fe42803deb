//! Mock API implementations for isolating controllers in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::sale::{NewSale, Sale, UpdateSale};
use crate::domain::user::{NewUser, UpdateUser, User};

use super::errors::ApiResult;
use super::{ClientApi, ListQuery, ProductApi, SaleApi, UserApi};

mock! {
    pub Api {}

    #[async_trait]
    impl ClientApi for Api {
        async fn list_clients(&self, query: ListQuery) -> ApiResult<Vec<Client>>;
        async fn create_client(&self, new_client: &NewClient) -> ApiResult<Client>;
        async fn update_client(&self, id: i64, updates: &UpdateClient) -> ApiResult<Client>;
        async fn delete_client(&self, id: i64) -> ApiResult<()>;
    }

    #[async_trait]
    impl ProductApi for Api {
        async fn list_products(&self, query: ListQuery) -> ApiResult<Vec<Product>>;
        async fn create_product(&self, new_product: &NewProduct) -> ApiResult<Product>;
        async fn update_product(&self, id: i64, updates: &UpdateProduct) -> ApiResult<Product>;
        async fn delete_product(&self, id: i64) -> ApiResult<()>;
    }

    #[async_trait]
    impl SaleApi for Api {
        async fn list_sales(&self, query: ListQuery) -> ApiResult<Vec<Sale>>;
        async fn create_sale(&self, new_sale: &NewSale) -> ApiResult<Sale>;
        async fn update_sale(&self, id: i64, updates: &UpdateSale) -> ApiResult<Sale>;
        async fn delete_sale(&self, id: i64) -> ApiResult<()>;
    }

    #[async_trait]
    impl UserApi for Api {
        async fn list_users(&self, query: ListQuery) -> ApiResult<Vec<User>>;
        async fn create_user(&self, new_user: &NewUser) -> ApiResult<User>;
        async fn update_user(&self, id: i64, updates: &UpdateUser) -> ApiResult<User>;
        async fn delete_user(&self, id: i64) -> ApiResult<()>;
    }
}
