use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{RecordStatus, UserRole};
use crate::domain::user::{NewUser, UpdateUser};

use super::FormError;

/// Form data for creating or editing a dashboard user.
///
/// The password is required on create and optional on edit, so the
/// conversion into [`NewUser`] can fail while the one into [`UpdateUser`]
/// cannot.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserForm {
    #[validate(length(min = 1, message = "nome é obrigatório"))]
    pub name: String,
    #[validate(email(message = "email inválido"))]
    pub email: String,
    pub role: UserRole,
    #[validate(length(min = 6, message = "senha deve ter ao menos 6 caracteres"))]
    pub password: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
}

impl UserForm {
    /// Converts into a create payload, requiring a password.
    pub fn to_new_user(&self) -> Result<NewUser, FormError> {
        let password = self
            .password
            .clone()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| FormError("senha é obrigatória".to_string()))?;
        Ok(NewUser::new(
            self.name.clone(),
            self.email.clone(),
            self.role,
            password,
            self.status,
        ))
    }
}

impl From<&UserForm> for UpdateUser {
    fn from(form: &UserForm) -> Self {
        UpdateUser::new(
            form.name.clone(),
            form.email.clone(),
            form.role,
            form.password.clone(),
            form.status,
        )
    }
}
