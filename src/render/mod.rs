//! Markup rendering: pure record → view-model transforms plus embedded Tera
//! fragments.
//!
//! The transform escapes user-supplied text fields before interpolation;
//! numeric and closed-enum fields pass through untouched. Templates run with
//! autoescape off because escaping is selective and already done by the view
//! models. Each render pass replaces the fragment wholesale; action buttons
//! carry `data-action`/`data-id` attributes so the embedding shell can wire
//! handlers after every pass.

pub mod clients;
pub mod products;
pub mod sales;
pub mod users;

use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use thiserror::Error;

use crate::dates;
use crate::domain::client::Client;
use crate::domain::product::Product;
use crate::domain::sale::Sale;
use crate::domain::user::User;
use crate::pagination::Paginated;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Rendering mode for a list page.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    #[serde(rename = "tabela")]
    Table,
    #[serde(rename = "cartoes")]
    Cards,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Table => "tabela",
            ViewMode::Cards => "cartoes",
        }
    }

    /// Parses a persisted preference value, defaulting to the table view.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "cartoes" | "cartões" => ViewMode::Cards,
            _ => ViewMode::Table,
        }
    }
}

/// HTML-entity escapes user-supplied text for interpolation into markup.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats a monetary amount in Brazilian convention (`R$ 1.234,56`).
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac:02}")
}

/// Formats a raw wire date as `dd/mm/yyyy`, `-` when absent or unparseable.
pub fn format_date(value: Option<&str>) -> String {
    value
        .and_then(dates::parse_flexible)
        .map(|parsed| parsed.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

const LOADING_TEMPLATE: &str =
    r#"<div class="carregando"><span class="spinner"></span> Carregando...</div>"#;

const EMPTY_TEMPLATE: &str =
    r#"<div class="sem-registros">Nenhum registro encontrado</div>"#;

const PAGINATION_TEMPLATE: &str = r#"{% if pages %}<nav class="paginacao">
{%- for p in pages %}
{%- if p %}<button data-action="page" data-page="{{ p }}"{% if p == current %} class="ativa"{% endif %}>{{ p }}</button>
{%- else %}<span class="reticencias">&hellip;</span>
{%- endif %}
{%- endfor %}
</nav>{% endif %}"#;

/// Renders list fragments from pre-escaped view models.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> RenderResult<Self> {
        let mut tera = Tera::default();
        // view models escape selectively; autoescape would double-escape
        tera.autoescape_on(Vec::new());
        tera.add_raw_templates(vec![
            ("clients_table.html", clients::TABLE_TEMPLATE),
            ("clients_cards.html", clients::CARDS_TEMPLATE),
            ("products_table.html", products::TABLE_TEMPLATE),
            ("products_cards.html", products::CARDS_TEMPLATE),
            ("sales_table.html", sales::TABLE_TEMPLATE),
            ("sales_cards.html", sales::CARDS_TEMPLATE),
            ("users_table.html", users::TABLE_TEMPLATE),
            ("users_cards.html", users::CARDS_TEMPLATE),
            ("pagination.html", PAGINATION_TEMPLATE),
            ("loading.html", LOADING_TEMPLATE),
            ("empty.html", EMPTY_TEMPLATE),
        ])?;
        Ok(Self { tera })
    }

    /// Placeholder shown while a fetch is in flight.
    pub fn loading(&self) -> RenderResult<String> {
        Ok(self.tera.render("loading.html", &Context::new())?)
    }

    /// Placeholder shown for an empty result, distinct from the loading one.
    pub fn empty(&self) -> RenderResult<String> {
        Ok(self.tera.render("empty.html", &Context::new())?)
    }

    /// Pagination controls for the given button layout; empty markup when
    /// there are no pages.
    pub fn pagination(&self, pages: &[Option<usize>], current: usize) -> RenderResult<String> {
        let mut context = Context::new();
        context.insert("pages", pages);
        context.insert("current", &current);
        Ok(self.tera.render("pagination.html", &context)?)
    }

    fn render_rows<R: Serialize>(
        &self,
        rows: &[R],
        view: ViewMode,
        table: &str,
        cards: &str,
    ) -> RenderResult<String> {
        if rows.is_empty() {
            return self.empty();
        }
        let mut context = Context::new();
        context.insert("rows", rows);
        let template = match view {
            ViewMode::Table => table,
            ViewMode::Cards => cards,
        };
        Ok(self.tera.render(template, &context)?)
    }

    pub fn clients(&self, page: &Paginated<Client>, view: ViewMode) -> RenderResult<String> {
        let rows: Vec<clients::ClientRow> = page.items.iter().map(Into::into).collect();
        self.render_rows(&rows, view, "clients_table.html", "clients_cards.html")
    }

    pub fn products(&self, page: &Paginated<Product>, view: ViewMode) -> RenderResult<String> {
        let rows: Vec<products::ProductRow> = page.items.iter().map(Into::into).collect();
        self.render_rows(&rows, view, "products_table.html", "products_cards.html")
    }

    pub fn sales(&self, page: &Paginated<Sale>, view: ViewMode) -> RenderResult<String> {
        let rows: Vec<sales::SaleRow> = page.items.iter().map(Into::into).collect();
        self.render_rows(&rows, view, "sales_table.html", "sales_cards.html")
    }

    pub fn users(&self, page: &Paginated<User>, view: ViewMode) -> RenderResult<String> {
        let rows: Vec<users::UserRow> = page.items.iter().map(Into::into).collect();
        self.render_rows(&rows, view, "users_table.html", "users_cards.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_the_five_significant_characters() {
        assert_eq!(
            escape_html(r#"O'Brien <script>"&"#),
            "O&#039;Brien &lt;script&gt;&quot;&amp;"
        );
        assert_eq!(escape_html("sem mudanças"), "sem mudanças");
    }

    #[test]
    fn currency_uses_brazilian_grouping() {
        assert_eq!(format_currency(1234.56), "R$ 1.234,56");
        assert_eq!(format_currency(0.5), "R$ 0,50");
        assert_eq!(format_currency(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(format_currency(-12.3), "-R$ 12,30");
    }

    #[test]
    fn date_formatting_tolerates_unparseable_input() {
        assert_eq!(format_date(Some("2024-03-15")), "15/03/2024");
        assert_eq!(format_date(Some("sem data")), "-");
        assert_eq!(format_date(None), "-");
    }
}
