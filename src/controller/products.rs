use crate::api::{ListQuery, ProductApi};
use crate::config::DashboardConfig;
use crate::domain::product::{NewProduct, Product, StockLevel, UpdateProduct};
use crate::domain::types::RecordStatus;
use crate::filters::{self, ProductFilter};
use crate::forms::FormError;
use crate::forms::product::ProductForm;
use crate::pagination::Paginated;
use crate::render::ViewMode;
use crate::store::{LocalStore, Preferences, Session};
use validator::Validate;

use super::state::{BannerLevel, ListState};
use super::{ConfirmDecision, PageEvent, fetch_failed, mutation_failed};

const PAGE_KEY: &str = "produtos";

/// Controller behind the products and inventory pages. The inventory view
/// is the same collection filtered by stock level.
pub struct ProductsController<A: ProductApi, S: LocalStore> {
    api: A,
    session: Session<S>,
    prefs: Preferences<S>,
    login_url: String,
    state: ListState<Product>,
    filter: ProductFilter,
}

impl<A: ProductApi, S: LocalStore> ProductsController<A, S> {
    pub fn new(
        config: &DashboardConfig,
        api: A,
        session: Session<S>,
        prefs: Preferences<S>,
    ) -> Self {
        let view = prefs.view_mode(PAGE_KEY);
        Self {
            api,
            session,
            prefs,
            login_url: config.login_url.clone(),
            state: ListState::new(config.items_per_page, view),
            filter: ProductFilter::default(),
        }
    }

    pub fn state(&self) -> &ListState<Product> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ListState<Product> {
        &mut self.state
    }

    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    pub async fn load(&mut self) -> PageEvent {
        if !self.session.is_authenticated() {
            return PageEvent::RedirectToLogin(self.login_url.clone());
        }
        self.state.begin_loading();
        match self.api.list_products(ListQuery::new()).await {
            Ok(products) => {
                self.state.set_records(products);
                self.clamp_to_filtered();
                PageEvent::None
            }
            Err(err) => fetch_failed(
                &mut self.state,
                &self.session,
                &self.login_url,
                "products",
                err,
            ),
        }
    }

    pub async fn retry(&mut self) -> PageEvent {
        self.load().await
    }

    pub fn set_search(&mut self, term: &str) {
        self.filter.set_search(term);
        self.state.reset_page();
    }

    pub fn set_category_filter(&mut self, value: &str) {
        self.filter.set_category(value);
        self.state.reset_page();
    }

    pub fn set_stock_filter(&mut self, value: &str) {
        self.filter.stock_level = StockLevel::parse_filter(value);
        self.state.reset_page();
    }

    pub fn set_status_filter(&mut self, value: &str) {
        self.filter.status = RecordStatus::parse_filter(value);
        self.state.reset_page();
    }

    pub fn set_page(&mut self, page: usize) {
        let total = self.filtered().len();
        self.state.set_page(page, total);
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.state.set_per_page(per_page);
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.state.set_view(view);
        self.prefs.set_view_mode(PAGE_KEY, view);
    }

    fn filtered(&self) -> Vec<Product> {
        filters::apply(self.state.records(), &self.filter)
    }

    fn clamp_to_filtered(&mut self) {
        let total = self.filtered().len();
        self.state.set_page(self.state.page(), total);
    }

    pub fn current_page(&self) -> Paginated<Product> {
        let filtered = self.filtered();
        Paginated::from_records(&filtered, self.state.page(), self.state.per_page())
    }

    /// Distinct categories present in the collection, for the filter
    /// dropdown.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .state
            .records()
            .iter()
            .filter_map(|p| p.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    pub async fn create(&mut self, form: &ProductForm) -> Result<PageEvent, FormError> {
        form.validate()?;
        self.state.begin_mutation();
        let new_product = NewProduct::from(form);
        match self.api.create_product(&new_product).await {
            Ok(_) => {
                self.state.show_banner(BannerLevel::Success, "Produto salvo.");
                Ok(self.load().await)
            }
            Err(err) => Ok(mutation_failed(
                &mut self.state,
                &self.session,
                &self.login_url,
                "product",
                err,
            )),
        }
    }

    pub async fn update(&mut self, id: i64, form: &ProductForm) -> Result<PageEvent, FormError> {
        form.validate()?;
        self.state.begin_mutation();
        let updates = UpdateProduct::from(form);
        match self.api.update_product(id, &updates).await {
            Ok(_) => {
                self.state
                    .show_banner(BannerLevel::Success, "Produto atualizado.");
                Ok(self.load().await)
            }
            Err(err) => Ok(mutation_failed(
                &mut self.state,
                &self.session,
                &self.login_url,
                "product",
                err,
            )),
        }
    }

    pub async fn delete(&mut self, id: i64, decision: ConfirmDecision) -> PageEvent {
        if decision == ConfirmDecision::Declined {
            return PageEvent::None;
        }
        self.state.begin_mutation();
        match self.api.delete_product(id).await {
            Ok(()) => {
                self.state
                    .show_banner(BannerLevel::Success, "Produto excluído.");
                self.load().await
            }
            Err(err) => mutation_failed(
                &mut self.state,
                &self.session,
                &self.login_url,
                "product",
                err,
            ),
        }
    }

    pub fn find(&self, id: i64) -> Option<&Product> {
        self.state.records().iter().find(|p| p.id == id)
    }
}
