//! View models and fragments for the clients page.

use serde::Serialize;

use crate::domain::client::Client;
use crate::domain::types::RecordStatus;

use super::escape_html;

/// One client prepared for interpolation: free-text fields pre-escaped,
/// status left as its closed wire string.
#[derive(Debug, Serialize)]
pub struct ClientRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub tax_id: String,
    pub status: &'static str,
    pub status_class: &'static str,
}

impl From<&Client> for ClientRow {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id,
            name: escape_html(&client.name),
            email: escape_html(client.email.as_deref().unwrap_or("-")),
            phone: escape_html(client.phone.as_deref().unwrap_or("-")),
            tax_id: escape_html(client.tax_id.as_deref().unwrap_or("-")),
            status: client.status.as_str(),
            status_class: match client.status {
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
  <td>{{ row.email }}</td>
  <td>{{ row.phone }}</td>
  <td>{{ row.tax_id }}</td>
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
    <span class="badge {{ row.status_class }}">{{ row.status }}</span>
  </header>
  <p>{{ row.email }}</p>
  <p>{{ row.phone }}</p>
  <footer class="acoes">
    <button data-action="edit" data-id="{{ row.id }}">Editar</button>
    <button data-action="delete" data-id="{{ row.id }}">Excluir</button>
  </footer>
</article>
{%- endfor %}
</div>"#;
