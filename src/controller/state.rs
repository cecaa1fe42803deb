use crate::pagination::{clamp_page, page_count};
use crate::render::ViewMode;

/// Where a page is in its fetch/mutate lifecycle.
///
/// `Error` only follows a failed fetch; a failed mutation returns the page
/// to `Ready` with a banner, since the previously fetched records are still
/// valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Init,
    Loading,
    Ready,
    Mutating,
    Error(String),
}

/// Severity of a transient banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerLevel {
    Success,
    Error,
}

/// Transient message surfaced after a mutation or shown alongside `Ready`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub level: BannerLevel,
    pub text: String,
}

/// Collection, pagination and view state shared by every page controller.
#[derive(Debug)]
pub struct ListState<T> {
    records: Vec<T>,
    page: usize,
    per_page: usize,
    view: ViewMode,
    phase: Phase,
    banner: Option<Banner>,
}

impl<T> ListState<T> {
    pub fn new(per_page: usize, view: ViewMode) -> Self {
        Self {
            records: Vec::new(),
            page: 1,
            per_page: per_page.max(1),
            view,
            phase: Phase::Init,
            banner: None,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Hands the banner to the shell for display, clearing it.
    pub fn take_banner(&mut self) -> Option<Banner> {
        self.banner.take()
    }

    pub(crate) fn begin_loading(&mut self) {
        self.phase = Phase::Loading;
    }

    pub(crate) fn begin_mutation(&mut self) {
        self.phase = Phase::Mutating;
    }

    pub(crate) fn set_records(&mut self, records: Vec<T>) {
        self.records = records;
        self.phase = Phase::Ready;
    }

    pub(crate) fn set_ready(&mut self) {
        self.phase = Phase::Ready;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.phase = Phase::Error(message);
    }

    pub(crate) fn show_banner(&mut self, level: BannerLevel, text: impl Into<String>) {
        self.banner = Some(Banner {
            level,
            text: text.into(),
        });
    }

    pub(crate) fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub(crate) fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Clamps the requested page against the current filtered total.
    pub(crate) fn set_page(&mut self, page: usize, filtered_total: usize) {
        self.page = clamp_page(page, page_count(filtered_total, self.per_page));
    }

    pub(crate) fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.page = 1;
    }
}
