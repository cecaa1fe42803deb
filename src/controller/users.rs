use crate::api::{ListQuery, UserApi};
use crate::config::DashboardConfig;
use crate::domain::types::{RecordStatus, UserRole};
use crate::domain::user::{UpdateUser, User};
use crate::filters::{self, UserFilter};
use crate::forms::FormError;
use crate::forms::user::UserForm;
use crate::pagination::Paginated;
use crate::render::ViewMode;
use crate::store::{LocalStore, Preferences, Session};
use validator::Validate;

use super::state::{BannerLevel, ListState};
use super::{ConfirmDecision, PageEvent, fetch_failed, mutation_failed};

const PAGE_KEY: &str = "usuarios";

/// Controller behind the users page.
pub struct UsersController<A: UserApi, S: LocalStore> {
    api: A,
    session: Session<S>,
    prefs: Preferences<S>,
    login_url: String,
    state: ListState<User>,
    filter: UserFilter,
}

impl<A: UserApi, S: LocalStore> UsersController<A, S> {
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
            filter: UserFilter::default(),
        }
    }

    pub fn state(&self) -> &ListState<User> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ListState<User> {
        &mut self.state
    }

    pub fn filter(&self) -> &UserFilter {
        &self.filter
    }

    pub async fn load(&mut self) -> PageEvent {
        if !self.session.is_authenticated() {
            return PageEvent::RedirectToLogin(self.login_url.clone());
        }
        self.state.begin_loading();
        match self.api.list_users(ListQuery::new()).await {
            Ok(users) => {
                self.state.set_records(users);
                self.clamp_to_filtered();
                PageEvent::None
            }
            Err(err) => fetch_failed(
                &mut self.state,
                &self.session,
                &self.login_url,
                "users",
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

    pub fn set_role_filter(&mut self, value: &str) {
        self.filter.role = UserRole::parse_filter(value);
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

    fn filtered(&self) -> Vec<User> {
        filters::apply(self.state.records(), &self.filter)
    }

    fn clamp_to_filtered(&mut self) {
        let total = self.filtered().len();
        self.state.set_page(self.state.page(), total);
    }

    pub fn current_page(&self) -> Paginated<User> {
        let filtered = self.filtered();
        Paginated::from_records(&filtered, self.state.page(), self.state.per_page())
    }

    /// Validates and submits a new user; the password is required here.
    pub async fn create(&mut self, form: &UserForm) -> Result<PageEvent, FormError> {
        form.validate()?;
        let new_user = form.to_new_user()?;
        self.state.begin_mutation();
        match self.api.create_user(&new_user).await {
            Ok(_) => {
                self.state.show_banner(BannerLevel::Success, "Usuário salvo.");
                Ok(self.load().await)
            }
            Err(err) => Ok(mutation_failed(
                &mut self.state,
                &self.session,
                &self.login_url,
                "user",
                err,
            )),
        }
    }

    /// Validates and submits changes; an empty password keeps the current
    /// one.
    pub async fn update(&mut self, id: i64, form: &UserForm) -> Result<PageEvent, FormError> {
        form.validate()?;
        self.state.begin_mutation();
        let updates = UpdateUser::from(form);
        match self.api.update_user(id, &updates).await {
            Ok(_) => {
                self.state
                    .show_banner(BannerLevel::Success, "Usuário atualizado.");
                Ok(self.load().await)
            }
            Err(err) => Ok(mutation_failed(
                &mut self.state,
                &self.session,
                &self.login_url,
                "user",
                err,
            )),
        }
    }

    pub async fn delete(&mut self, id: i64, decision: ConfirmDecision) -> PageEvent {
        if decision == ConfirmDecision::Declined {
            return PageEvent::None;
        }
        self.state.begin_mutation();
        match self.api.delete_user(id).await {
            Ok(()) => {
                self.state
                    .show_banner(BannerLevel::Success, "Usuário excluído.");
                self.load().await
            }
            Err(err) => mutation_failed(
                &mut self.state,
                &self.session,
                &self.login_url,
                "user",
                err,
            ),
        }
    }

    pub fn find(&self, id: i64) -> Option<&User> {
        self.state.records().iter().find(|u| u.id == id)
    }
}
