use chrono::Local;

use crate::api::{ClientApi, ListQuery, ProductApi, SaleApi};
use crate::config::DashboardConfig;
use crate::domain::client::Client;
use crate::domain::product::Product;
use crate::domain::sale::{NewSale, Sale, UpdateSale};
use crate::domain::types::SaleStatus;
use crate::filters::{self, SaleFilter, SalePeriod};
use crate::forms::FormError;
use crate::forms::sale::SaleForm;
use crate::pagination::Paginated;
use crate::render::ViewMode;
use crate::store::{LocalStore, Preferences, Session};

use super::state::{BannerLevel, ListState};
use super::{ConfirmDecision, PageEvent, fetch_failed, mutation_failed};

const PAGE_KEY: &str = "vendas";

/// Controller behind the sales page.
///
/// Mounting fetches sales, clients and products concurrently and joins
/// before proceeding: client names are resolved against the client list and
/// the product list feeds the new-sale form.
pub struct SalesController<A, S>
where
    A: SaleApi + ClientApi + ProductApi,
    S: LocalStore,
{
    api: A,
    session: Session<S>,
    prefs: Preferences<S>,
    login_url: String,
    state: ListState<Sale>,
    filter: SaleFilter,
    clients: Vec<Client>,
    products: Vec<Product>,
}

impl<A, S> SalesController<A, S>
where
    A: SaleApi + ClientApi + ProductApi,
    S: LocalStore,
{
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
            filter: SaleFilter::default(),
            clients: Vec::new(),
            products: Vec::new(),
        }
    }

    pub fn state(&self) -> &ListState<Sale> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ListState<Sale> {
        &mut self.state
    }

    pub fn filter(&self) -> &SaleFilter {
        &self.filter
    }

    /// Clients available to the new-sale form.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Products available to the new-sale form.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Fetches sales, clients and products concurrently, joining before the
    /// page becomes ready.
    pub async fn load(&mut self) -> PageEvent {
        if !self.session.is_authenticated() {
            return PageEvent::RedirectToLogin(self.login_url.clone());
        }
        self.state.begin_loading();
        let fetched = tokio::try_join!(
            self.api.list_sales(ListQuery::new()),
            self.api.list_clients(ListQuery::new()),
            self.api.list_products(ListQuery::new()),
        );
        match fetched {
            Ok((sales, clients, products)) => {
                self.clients = clients;
                self.products = products;
                self.state.set_records(sales);
                self.clamp_to_filtered();
                PageEvent::None
            }
            Err(err) => fetch_failed(
                &mut self.state,
                &self.session,
                &self.login_url,
                "sales",
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

    pub fn set_status_filter(&mut self, value: &str) {
        self.filter.status = SaleStatus::parse_filter(value);
        self.state.reset_page();
    }

    /// Sets the period filter against today's date.
    pub fn set_period_filter(&mut self, value: &str) {
        self.set_period_filter_at(value, Local::now().date_naive());
    }

    /// Period filter with an explicit reference date, used by tests.
    pub fn set_period_filter_at(&mut self, value: &str, today: chrono::NaiveDate) {
        self.filter.set_period(SalePeriod::parse_filter(value), today);
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

    fn filtered(&self) -> Vec<Sale> {
        filters::apply(self.state.records(), &self.filter)
    }

    fn clamp_to_filtered(&mut self) {
        let total = self.filtered().len();
        self.state.set_page(self.state.page(), total);
    }

    /// Fills in missing client names from the joined client list.
    fn resolve(&self, mut sale: Sale) -> Sale {
        if sale.client_name.is_none() {
            sale.client_name = self
                .clients
                .iter()
                .find(|c| c.id == sale.client_id)
                .map(|c| c.name.clone());
        }
        sale
    }

    /// The sales visible on the current page, client names resolved.
    pub fn current_page(&self) -> Paginated<Sale> {
        let filtered = self.filtered();
        let page = Paginated::from_records(&filtered, self.state.page(), self.state.per_page());
        Paginated {
            items: page.items.into_iter().map(|s| self.resolve(s)).collect(),
            pages: page.pages,
            page: page.page,
            total: page.total,
        }
    }

    pub async fn create(&mut self, form: &SaleForm) -> Result<PageEvent, FormError> {
        form.validate_all()?;
        self.state.begin_mutation();
        let new_sale = NewSale::from(form);
        match self.api.create_sale(&new_sale).await {
            Ok(_) => {
                self.state
                    .show_banner(BannerLevel::Success, "Venda registrada.");
                Ok(self.load().await)
            }
            Err(err) => Ok(mutation_failed(
                &mut self.state,
                &self.session,
                &self.login_url,
                "sale",
                err,
            )),
        }
    }

    pub async fn update(&mut self, id: i64, form: &SaleForm) -> Result<PageEvent, FormError> {
        form.validate_all()?;
        self.state.begin_mutation();
        let updates = UpdateSale::from(form);
        match self.api.update_sale(id, &updates).await {
            Ok(_) => {
                self.state
                    .show_banner(BannerLevel::Success, "Venda atualizada.");
                Ok(self.load().await)
            }
            Err(err) => Ok(mutation_failed(
                &mut self.state,
                &self.session,
                &self.login_url,
                "sale",
                err,
            )),
        }
    }

    pub async fn delete(&mut self, id: i64, decision: ConfirmDecision) -> PageEvent {
        if decision == ConfirmDecision::Declined {
            return PageEvent::None;
        }
        self.state.begin_mutation();
        match self.api.delete_sale(id).await {
            Ok(()) => {
                self.state
                    .show_banner(BannerLevel::Success, "Venda excluída.");
                self.load().await
            }
            Err(err) => mutation_failed(
                &mut self.state,
                &self.session,
                &self.login_url,
                "sale",
                err,
            ),
        }
    }

    pub fn find(&self, id: i64) -> Option<&Sale> {
        self.state.records().iter().find(|s| s.id == id)
    }
}
