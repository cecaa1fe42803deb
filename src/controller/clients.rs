use crate::api::{ClientApi, ListQuery};
use crate::config::DashboardConfig;
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::types::RecordStatus;
use crate::filters::{self, ClientFilter};
use crate::forms::FormError;
use crate::forms::client::ClientForm;
use crate::pagination::Paginated;
use crate::render::ViewMode;
use crate::store::{LocalStore, Preferences, Session};
use validator::Validate;

use super::state::{BannerLevel, ListState};
use super::{ConfirmDecision, PageEvent, fetch_failed, mutation_failed};

const PAGE_KEY: &str = "clientes";

/// Controller behind the clients page.
pub struct ClientsController<A: ClientApi, S: LocalStore> {
    api: A,
    session: Session<S>,
    prefs: Preferences<S>,
    login_url: String,
    state: ListState<Client>,
    filter: ClientFilter,
}

impl<A: ClientApi, S: LocalStore> ClientsController<A, S> {
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
            filter: ClientFilter::default(),
        }
    }

    pub fn state(&self) -> &ListState<Client> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ListState<Client> {
        &mut self.state
    }

    pub fn filter(&self) -> &ClientFilter {
        &self.filter
    }

    /// Fetches the collection, replacing the in-memory records. Mounting
    /// without a session goes straight to the login page.
    pub async fn load(&mut self) -> PageEvent {
        if !self.session.is_authenticated() {
            return PageEvent::RedirectToLogin(self.login_url.clone());
        }
        self.state.begin_loading();
        match self.api.list_clients(ListQuery::new()).await {
            Ok(clients) => {
                self.state.set_records(clients);
                self.clamp_to_filtered();
                PageEvent::None
            }
            Err(err) => fetch_failed(
                &mut self.state,
                &self.session,
                &self.login_url,
                "clients",
                err,
            ),
        }
    }

    /// Re-fetches after a failed load.
    pub async fn retry(&mut self) -> PageEvent {
        self.load().await
    }

    pub fn set_search(&mut self, term: &str) {
        self.filter.set_search(term);
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

    /// Switches the view and persists the preference.
    pub fn set_view(&mut self, view: ViewMode) {
        self.state.set_view(view);
        self.prefs.set_view_mode(PAGE_KEY, view);
    }

    fn filtered(&self) -> Vec<Client> {
        filters::apply(self.state.records(), &self.filter)
    }

    fn clamp_to_filtered(&mut self) {
        let total = self.filtered().len();
        self.state.set_page(self.state.page(), total);
    }

    /// The records visible on the current page plus the button layout.
    pub fn current_page(&self) -> Paginated<Client> {
        let filtered = self.filtered();
        Paginated::from_records(&filtered, self.state.page(), self.state.per_page())
    }

    /// Validates and submits a new client, then re-fetches the collection.
    pub async fn create(&mut self, form: &ClientForm) -> Result<PageEvent, FormError> {
        form.validate()?;
        self.state.begin_mutation();
        let new_client = NewClient::from(form);
        match self.api.create_client(&new_client).await {
            Ok(_) => {
                self.state.show_banner(BannerLevel::Success, "Cliente salvo.");
                Ok(self.load().await)
            }
            Err(err) => Ok(mutation_failed(
                &mut self.state,
                &self.session,
                &self.login_url,
                "client",
                err,
            )),
        }
    }

    /// Validates and submits changes to an existing client.
    pub async fn update(&mut self, id: i64, form: &ClientForm) -> Result<PageEvent, FormError> {
        form.validate()?;
        self.state.begin_mutation();
        let updates = UpdateClient::from(form);
        match self.api.update_client(id, &updates).await {
            Ok(_) => {
                self.state
                    .show_banner(BannerLevel::Success, "Cliente atualizado.");
                Ok(self.load().await)
            }
            Err(err) => Ok(mutation_failed(
                &mut self.state,
                &self.session,
                &self.login_url,
                "client",
                err,
            )),
        }
    }

    /// Deletes after explicit confirmation; a declined dialog is a no-op and
    /// no request is issued.
    pub async fn delete(&mut self, id: i64, decision: ConfirmDecision) -> PageEvent {
        if decision == ConfirmDecision::Declined {
            return PageEvent::None;
        }
        self.state.begin_mutation();
        match self.api.delete_client(id).await {
            Ok(()) => {
                self.state
                    .show_banner(BannerLevel::Success, "Cliente excluído.");
                self.load().await
            }
            Err(err) => mutation_failed(
                &mut self.state,
                &self.session,
                &self.login_url,
                "client",
                err,
            ),
        }
    }

    /// Fetches a single client by scanning the in-memory collection.
    pub fn find(&self, id: i64) -> Option<&Client> {
        self.state.records().iter().find(|c| c.id == id)
    }
}
