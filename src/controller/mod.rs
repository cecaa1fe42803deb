//! Page controllers: one per dashboard page, owning the in-memory
//! collection, the active filter, pagination and view state.
//!
//! A controller is mounted by the embedding shell, loaded once, and then
//! driven by user events: every mutator re-runs filter → paginate, and the
//! shell re-renders from [`ListState`]. Mutations re-fetch the whole
//! collection on success so server-computed fields are echoed back.
//!
//! Rapid successive loads keep whatever response resolves last; there is no
//! sequencing token, matching the reference behavior (a slow, stale
//! response can overwrite a fresher one).

mod clients;
mod products;
mod sales;
mod state;
mod users;

pub use clients::ClientsController;
pub use products::ProductsController;
pub use sales::SalesController;
pub use state::{Banner, BannerLevel, ListState, Phase};
pub use users::UsersController;

use crate::api::ApiError;
use crate::store::{LocalStore, Session};

/// Outcome of a controller operation the embedding shell must act on.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum PageEvent {
    /// Nothing to do beyond re-rendering.
    None,
    /// The session is gone; navigate to the login page.
    RedirectToLogin(String),
}

/// Explicit answer to a delete confirmation prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmDecision {
    Confirmed,
    Declined,
}

/// Shared handling for a failed fetch: 401 clears the session and redirects
/// without touching the page state; anything else moves the page to `Error`.
fn fetch_failed<T, S: LocalStore>(
    state: &mut ListState<T>,
    session: &Session<S>,
    login_url: &str,
    entity: &str,
    err: ApiError,
) -> PageEvent {
    if matches!(err, ApiError::Unauthorized) {
        session.clear();
        return PageEvent::RedirectToLogin(login_url.to_string());
    }
    log::error!("failed to load {entity}: {err}");
    state.fail(err.to_string());
    PageEvent::None
}

/// Shared handling for a failed mutation: the records on screen are still
/// valid, so the page returns to `Ready` with an error banner.
fn mutation_failed<T, S: LocalStore>(
    state: &mut ListState<T>,
    session: &Session<S>,
    login_url: &str,
    entity: &str,
    err: ApiError,
) -> PageEvent {
    if matches!(err, ApiError::Unauthorized) {
        session.clear();
        return PageEvent::RedirectToLogin(login_url.to_string());
    }
    log::error!("{entity} mutation failed: {err}");
    state.show_banner(BannerLevel::Error, err.to_string());
    state.set_ready();
    PageEvent::None
}
