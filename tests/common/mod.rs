//! Shared fixtures: an in-process fake API and record builders.
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;

use erp_dashboard::api::{ApiError, ApiResult, ClientApi, ListQuery, ProductApi, SaleApi, UserApi};
use erp_dashboard::config::DashboardConfig;
use erp_dashboard::domain::client::{Client, NewClient, UpdateClient};
use erp_dashboard::domain::product::{NewProduct, Product, UpdateProduct};
use erp_dashboard::domain::sale::{NewSale, Sale, UpdateSale};
use erp_dashboard::domain::types::{RecordStatus, SaleStatus, UserRole};
use erp_dashboard::domain::user::{NewUser, UpdateUser, User};

/// Initializes logging once so failing tests show the controller error logs.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// In-memory stand-in for the REST API, with switches to simulate failures
/// and counters to assert which requests were issued.
#[derive(Default)]
pub struct FakeApi {
    pub clients: Mutex<Vec<Client>>,
    pub products: Mutex<Vec<Product>>,
    pub sales: Mutex<Vec<Sale>>,
    pub users: Mutex<Vec<User>>,
    next_id: AtomicI64,
    /// Every request answers 401 while set.
    pub unauthorized: AtomicBool,
    /// Every request fails with this message while set.
    pub fail_message: Mutex<Option<String>>,
    pub list_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1000),
            ..Self::default()
        }
    }

    pub fn with_clients(clients: Vec<Client>) -> Self {
        let api = Self::new();
        *api.clients.lock().unwrap() = clients;
        api
    }

    pub fn set_unauthorized(&self, value: bool) {
        self.unauthorized.store(value, Ordering::SeqCst);
    }

    pub fn set_failure(&self, message: &str) {
        *self.fail_message.lock().unwrap() = Some(message.to_string());
    }

    pub fn clear_failure(&self) {
        *self.fail_message.lock().unwrap() = None;
    }

    fn check(&self) -> ApiResult<()> {
        if self.unauthorized.load(Ordering::SeqCst) {
            return Err(ApiError::Unauthorized);
        }
        if let Some(message) = self.fail_message.lock().unwrap().clone() {
            return Err(ApiError::Api {
                status: 422,
                message,
            });
        }
        Ok(())
    }

    fn assign_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl ClientApi for FakeApi {
    async fn list_clients(&self, _query: ListQuery) -> ApiResult<Vec<Client>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.clients.lock().unwrap().clone())
    }

    async fn create_client(&self, new_client: &NewClient) -> ApiResult<Client> {
        self.check()?;
        let client = Client {
            id: self.assign_id(),
            name: new_client.name.clone(),
            email: new_client.email.clone(),
            phone: new_client.phone.clone(),
            tax_id: new_client.tax_id.clone(),
            address: new_client.address.clone(),
            status: new_client.status,
        };
        self.clients.lock().unwrap().push(client.clone());
        Ok(client)
    }

    async fn update_client(&self, id: i64, updates: &UpdateClient) -> ApiResult<Client> {
        self.check()?;
        let mut clients = self.clients.lock().unwrap();
        let client = clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ApiError::Api {
                status: 404,
                message: "Cliente não encontrado".to_string(),
            })?;
        client.name = updates.name.clone();
        client.email = updates.email.clone();
        client.phone = updates.phone.clone();
        client.tax_id = updates.tax_id.clone();
        client.address = updates.address.clone();
        client.status = updates.status;
        Ok(client.clone())
    }

    async fn delete_client(&self, id: i64) -> ApiResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.clients.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }
}

#[async_trait]
impl ProductApi for FakeApi {
    async fn list_products(&self, _query: ListQuery) -> ApiResult<Vec<Product>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.products.lock().unwrap().clone())
    }

    async fn create_product(&self, new_product: &NewProduct) -> ApiResult<Product> {
        self.check()?;
        let product = Product {
            id: self.assign_id(),
            name: new_product.name.clone(),
            description: new_product.description.clone(),
            category: new_product.category.clone(),
            price: new_product.price,
            stock: new_product.stock,
            status: new_product.status,
        };
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: i64, updates: &UpdateProduct) -> ApiResult<Product> {
        self.check()?;
        let mut products = self.products.lock().unwrap();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ApiError::Api {
                status: 404,
                message: "Produto não encontrado".to_string(),
            })?;
        product.name = updates.name.clone();
        product.description = updates.description.clone();
        product.category = updates.category.clone();
        product.price = updates.price;
        product.stock = updates.stock;
        product.status = updates.status;
        Ok(product.clone())
    }

    async fn delete_product(&self, id: i64) -> ApiResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.products.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }
}

#[async_trait]
impl SaleApi for FakeApi {
    async fn list_sales(&self, _query: ListQuery) -> ApiResult<Vec<Sale>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.sales.lock().unwrap().clone())
    }

    async fn create_sale(&self, new_sale: &NewSale) -> ApiResult<Sale> {
        self.check()?;
        let sale = Sale {
            id: self.assign_id(),
            client_id: new_sale.client_id,
            client_name: None,
            total: new_sale.total,
            date: new_sale.date.clone(),
            status: new_sale.status,
        };
        self.sales.lock().unwrap().push(sale.clone());
        Ok(sale)
    }

    async fn update_sale(&self, id: i64, updates: &UpdateSale) -> ApiResult<Sale> {
        self.check()?;
        let mut sales = self.sales.lock().unwrap();
        let sale = sales.iter_mut().find(|s| s.id == id).ok_or(ApiError::Api {
            status: 404,
            message: "Venda não encontrada".to_string(),
        })?;
        sale.client_id = updates.client_id;
        sale.total = updates.total;
        sale.date = updates.date.clone();
        sale.status = updates.status;
        Ok(sale.clone())
    }

    async fn delete_sale(&self, id: i64) -> ApiResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.sales.lock().unwrap().retain(|s| s.id != id);
        Ok(())
    }
}

#[async_trait]
impl UserApi for FakeApi {
    async fn list_users(&self, _query: ListQuery) -> ApiResult<Vec<User>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create_user(&self, new_user: &NewUser) -> ApiResult<User> {
        self.check()?;
        let user = User {
            id: self.assign_id(),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            role: new_user.role,
            status: new_user.status,
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: i64, updates: &UpdateUser) -> ApiResult<User> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let user = users.iter_mut().find(|u| u.id == id).ok_or(ApiError::Api {
            status: 404,
            message: "Usuário não encontrado".to_string(),
        })?;
        user.name = updates.name.clone();
        user.email = updates.email.clone();
        user.role = updates.role;
        user.status = updates.status;
        Ok(user.clone())
    }

    async fn delete_user(&self, id: i64) -> ApiResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.users.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }
}

// Controllers take the API by value; tests keep a handle on the fixture by
// passing a cloneable shared wrapper and inspecting the `Arc` afterwards.
// The forwarding impls live on this local newtype because the orphan rule
// forbids implementing the crate's API traits directly for `Arc<FakeApi>`.
#[derive(Clone)]
pub struct SharedApi(pub std::sync::Arc<FakeApi>);

#[async_trait]
impl ClientApi for SharedApi {
    async fn list_clients(&self, query: ListQuery) -> ApiResult<Vec<Client>> {
        self.0.list_clients(query).await
    }
    async fn create_client(&self, new_client: &NewClient) -> ApiResult<Client> {
        self.0.create_client(new_client).await
    }
    async fn update_client(&self, id: i64, updates: &UpdateClient) -> ApiResult<Client> {
        self.0.update_client(id, updates).await
    }
    async fn delete_client(&self, id: i64) -> ApiResult<()> {
        self.0.delete_client(id).await
    }
}

#[async_trait]
impl ProductApi for SharedApi {
    async fn list_products(&self, query: ListQuery) -> ApiResult<Vec<Product>> {
        self.0.list_products(query).await
    }
    async fn create_product(&self, new_product: &NewProduct) -> ApiResult<Product> {
        self.0.create_product(new_product).await
    }
    async fn update_product(&self, id: i64, updates: &UpdateProduct) -> ApiResult<Product> {
        self.0.update_product(id, updates).await
    }
    async fn delete_product(&self, id: i64) -> ApiResult<()> {
        self.0.delete_product(id).await
    }
}

#[async_trait]
impl SaleApi for SharedApi {
    async fn list_sales(&self, query: ListQuery) -> ApiResult<Vec<Sale>> {
        self.0.list_sales(query).await
    }
    async fn create_sale(&self, new_sale: &NewSale) -> ApiResult<Sale> {
        self.0.create_sale(new_sale).await
    }
    async fn update_sale(&self, id: i64, updates: &UpdateSale) -> ApiResult<Sale> {
        self.0.update_sale(id, updates).await
    }
    async fn delete_sale(&self, id: i64) -> ApiResult<()> {
        self.0.delete_sale(id).await
    }
}

#[async_trait]
impl UserApi for SharedApi {
    async fn list_users(&self, query: ListQuery) -> ApiResult<Vec<User>> {
        self.0.list_users(query).await
    }
    async fn create_user(&self, new_user: &NewUser) -> ApiResult<User> {
        self.0.create_user(new_user).await
    }
    async fn update_user(&self, id: i64, updates: &UpdateUser) -> ApiResult<User> {
        self.0.update_user(id, updates).await
    }
    async fn delete_user(&self, id: i64) -> ApiResult<()> {
        self.0.delete_user(id).await
    }
}

pub fn config() -> DashboardConfig {
    DashboardConfig {
        api_base_url: "http://localhost:3000".to_string(),
        login_url: "/login.html".to_string(),
        request_timeout_secs: 5,
        items_per_page: 10,
    }
}

pub fn client(id: i64, name: &str) -> Client {
    Client {
        id,
        name: name.to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
        phone: Some("11 98765-4321".to_string()),
        tax_id: None,
        address: None,
        status: RecordStatus::Active,
    }
}

pub fn product(id: i64, name: &str, stock: u32) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: None,
        category: Some("Papelaria".to_string()),
        price: 9.9,
        stock,
        status: RecordStatus::Active,
    }
}

pub fn sale(id: i64, client_id: i64, date: &str) -> Sale {
    Sale {
        id,
        client_id,
        client_name: None,
        total: 120.0,
        date: Some(date.to_string()),
        status: SaleStatus::Pending,
    }
}

pub fn user(id: i64, name: &str, role: UserRole) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role,
        status: RecordStatus::Active,
    }
}
