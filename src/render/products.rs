//! View models and fragments for the products and inventory pages.

use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::types::RecordStatus;

use super::{escape_html, format_currency};

#[derive(Debug, Serialize)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub stock: u32,
    pub stock_level: &'static str,
    pub stock_class: &'static str,
    pub status: &'static str,
    pub status_class: &'static str,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        let level = product.stock_level();
        Self {
            id: product.id,
            name: escape_html(&product.name),
            description: escape_html(product.description.as_deref().unwrap_or("-")),
            category: escape_html(product.category.as_deref().unwrap_or("-")),
            price: format_currency(product.price),
            stock: product.stock,
            stock_level: level.label(),
            stock_class: level.css_class(),
            status: product.status.as_str(),
            status_class: match product.status {
                RecordStatus::Active => "badge-ativo",
                RecordStatus::Inactive => "badge-inativo",
            },
        }
    }
}

pub(super) const TABLE_TEMPLATE: &str = r#"<tbody>
{%- for row in rows %}
<tr data-id="{{ row.id }}">
  <td>{{ row.name }}</td>
  <td>{{ row.category }}</td>
  <td>{{ row.price }}</td>
  <td><span class="badge {{ row.stock_class }}">{{ row.stock }} ({{ row.stock_level }})</span></td>
  <td><span class="badge {{ row.status_class }}">{{ row.status }}</span></td>
  <td class="acoes">
    <button data-action="view" data-id="{{ row.id }}">Ver</button>
    <button data-action="edit" data-id="{{ row.id }}">Editar</button>
    <button data-action="delete" data-id="{{ row.id }}">Excluir</button>
  </td>
</tr>
{%- endfor %}
</tbody>"#;

pub(super) const CARDS_TEMPLATE: &str = r#"<div class="cartoes">
{%- for row in rows %}
<article class="cartao" data-id="{{ row.id }}">
  <header>
    <h3>{{ row.name }}</h3>
    <span class="badge {{ row.stock_class }}">{{ row.stock_level }}</span>
  </header>
  <p>{{ row.description }}</p>
  <p class="preco">{{ row.price }}</p>
  <footer class="acoes">
    <button data-action="edit" data-id="{{ row.id }}">Editar</button>
    <button data-action="delete" data-id="{{ row.id }}">Excluir</button>
  </footer>
</article>
{%- endfor %}
</div>"#;
