//! View models and fragments for the users page.

use serde::Serialize;

use crate::domain::types::RecordStatus;
use crate::domain::user::User;

use super::escape_html;

#[derive(Debug, Serialize)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: &'static str,
    pub status: &'static str,
    pub status_class: &'static str,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: escape_html(&user.name),
            email: escape_html(&user.email),
            role: user.role.label(),
            status: user.status.as_str(),
            status_class: match user.status {
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
  <td>{{ row.role }}</td>
  <td><span class="badge {{ row.status_class }}">{{ row.status }}</span></td>
  <td class="acoes">
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
  <p>{{ row.role }}</p>
  <footer class="acoes">
    <button data-action="edit" data-id="{{ row.id }}">Editar</button>
    <button data-action="delete" data-id="{{ row.id }}">Excluir</button>
  </footer>
</article>
{%- endfor %}
</div>"#;
