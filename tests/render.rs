//! Renderer output: escaping, placeholders and view switching.

mod common;

use erp_dashboard::domain::types::UserRole;
use erp_dashboard::pagination::Paginated;
use erp_dashboard::render::{Renderer, ViewMode, escape_html};

use common::{client, product, sale, user};

fn page_of<T: Clone>(items: Vec<T>) -> Paginated<T> {
    let total = items.len();
    Paginated::new(items, 1, 1, total)
}

#[test]
fn user_supplied_text_is_entity_escaped_in_table_cells() {
    let renderer = Renderer::new().unwrap();
    let mut hostile = client(1, "x");
    hostile.name = "O'Brien <script>".to_string();

    let html = renderer
        .clients(&page_of(vec![hostile]), ViewMode::Table)
        .unwrap();

    assert!(html.contains("O&#039;Brien &lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn numeric_and_enum_fields_pass_through_unescaped() {
    let renderer = Renderer::new().unwrap();
    let html = renderer
        .clients(&page_of(vec![client(42, "Ana")]), ViewMode::Table)
        .unwrap();

    assert!(html.contains(r#"data-id="42""#));
    assert!(html.contains("Ativo"));
}

#[test]
fn empty_page_placeholder_differs_from_loading() {
    let renderer = Renderer::new().unwrap();
    let empty = renderer
        .clients(&page_of::<erp_dashboard::domain::client::Client>(vec![]), ViewMode::Table)
        .unwrap();
    let loading = renderer.loading().unwrap();

    assert!(empty.contains("Nenhum registro encontrado"));
    assert!(loading.contains("Carregando"));
    assert_ne!(empty, loading);
}

#[test]
fn cards_and_table_views_produce_different_markup() {
    let renderer = Renderer::new().unwrap();
    let page = page_of(vec![product(1, "Caneta", 3)]);

    let table = renderer.products(&page, ViewMode::Table).unwrap();
    let cards = renderer.products(&page, ViewMode::Cards).unwrap();

    assert!(table.contains("<tbody>"));
    assert!(cards.contains("cartao"));
    assert_ne!(table, cards);
}

#[test]
fn rows_embed_action_triggers() {
    let renderer = Renderer::new().unwrap();
    let html = renderer
        .users(&page_of(vec![user(5, "Carlos", UserRole::Admin)]), ViewMode::Table)
        .unwrap();

    assert!(html.contains(r#"data-action="edit" data-id="5""#));
    assert!(html.contains(r#"data-action="delete" data-id="5""#));
}

#[test]
fn sales_rows_format_currency_and_date() {
    let renderer = Renderer::new().unwrap();
    let mut record = sale(9, 1, "15/03/2024");
    record.total = 1234.5;
    record.client_name = Some("Loja Azul".to_string());

    let html = renderer.sales(&page_of(vec![record]), ViewMode::Table).unwrap();

    assert!(html.contains("R$ 1.234,50"));
    assert!(html.contains("15/03/2024"));
    assert!(html.contains("Loja Azul"));
    assert!(html.contains("Pendente"));
}

#[test]
fn pagination_fragment_renders_buttons_and_ellipsis() {
    let renderer = Renderer::new().unwrap();
    let html = renderer
        .pagination(&[Some(1), None, Some(9), Some(10)], 10)
        .unwrap();

    assert!(html.contains(r#"data-page="1""#));
    assert!(html.contains("&hellip;"));
    assert!(html.contains(r#"class="ativa""#));

    let none = renderer.pagination(&[], 1).unwrap();
    assert!(!none.contains("<nav"));
}

#[test]
fn escape_helper_matches_reference_entities() {
    assert_eq!(escape_html("O'Brien <script>"), "O&#039;Brien &lt;script&gt;");
    assert_eq!(escape_html(r#"a & "b""#), "a &amp; &quot;b&quot;");
}
