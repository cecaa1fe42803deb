//! View models and fragments for the sales page.

use serde::Serialize;

use crate::domain::sale::Sale;
use crate::domain::types::SaleStatus;

use super::{escape_html, format_currency, format_date};

#[derive(Debug, Serialize)]
pub struct SaleRow {
    pub id: i64,
    pub client_name: String,
    pub total: String,
    pub date: String,
    pub status: &'static str,
    pub status_class: &'static str,
}

impl From<&Sale> for SaleRow {
    fn from(sale: &Sale) -> Self {
        Self {
            id: sale.id,
            client_name: escape_html(sale.client_name.as_deref().unwrap_or("-")),
            total: format_currency(sale.total),
            date: format_date(sale.date.as_deref()),
            status: sale.status.as_str(),
            status_class: match sale.status {
                SaleStatus::Pending => "badge-pendente",
                SaleStatus::Completed => "badge-concluida",
                SaleStatus::Cancelled => "badge-cancelada",
            },
        }
    }
}

pub(super) const TABLE_TEMPLATE: &str = r#"<tbody>
{%- for row in rows %}
<tr data-id="{{ row.id }}">
  <td>#{{ row.id }}</td>
  <td>{{ row.client_name }}</td>
  <td>{{ row.date }}</td>
  <td>{{ row.total }}</td>
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
    <h3>#{{ row.id }} {{ row.client_name }}</h3>
    <span class="badge {{ row.status_class }}">{{ row.status }}</span>
  </header>
  <p>{{ row.date }}</p>
  <p class="total">{{ row.total }}</p>
  <footer class="acoes">
    <button data-action="view" data-id="{{ row.id }}">Ver</button>
    <button data-action="delete" data-id="{{ row.id }}">Excluir</button>
  </footer>
</article>
{%- endfor %}
</div>"#;
