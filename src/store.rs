//! Client-local persistence.
//!
//! A process-wide string key/value store stands in for the browser's
//! `localStorage`; the session, preference and note accessors are thin
//! layers over it with fixed key names. The session is written once by the
//! login flow (out of scope here), read by every request, and cleared when
//! the server answers 401.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::types::UserRole;
use crate::render::ViewMode;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "usuario";
const THEME_KEY: &str = "tema";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt store file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// String key/value store with interior mutability.
pub trait LocalStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

fn lock_values(
    values: &Mutex<HashMap<String, String>>,
) -> MutexGuard<'_, HashMap<String, String>> {
    values.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Volatile store used by tests and short-lived sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        lock_values(&self.values).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        lock_values(&self.values).insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        lock_values(&self.values).remove(key);
    }
}

/// JSON-file-backed store giving preferences cross-run continuity.
///
/// Writes go through on every mutation; a failed write is logged and the
/// in-memory value kept, since losing a preference must never break the
/// page.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    fn persist(&self, values: &HashMap<String, String>) {
        let result = serde_json::to_string_pretty(values)
            .map_err(StoreError::from)
            .and_then(|raw| std::fs::write(&self.path, raw).map_err(StoreError::from));
        if let Err(err) = result {
            log::warn!("failed to persist store to {}: {err}", self.path.display());
        }
    }
}

impl LocalStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        lock_values(&self.values).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = lock_values(&self.values);
        values.insert(key.to_string(), value.to_string());
        self.persist(&values);
    }

    fn remove(&self, key: &str) {
        let mut values = lock_values(&self.values);
        values.remove(key);
        self.persist(&values);
    }
}

/// Profile of the logged-in user as written by the login flow.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "tipo")]
    pub role: UserRole,
}

/// Read/clear access to the token and profile written at login.
#[derive(Debug)]
pub struct Session<S: LocalStore> {
    store: Arc<S>,
}

impl<S: LocalStore> Clone for Session<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: LocalStore> Session<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(err) => {
                log::warn!("stored user profile is unreadable: {err}");
                None
            }
        }
    }

    /// Persists a fresh session. Only the login flow calls this.
    pub fn store_session(&self, token: &str, user: &UserProfile) -> Result<(), StoreError> {
        self.store.set(TOKEN_KEY, token);
        self.store.set(USER_KEY, &serde_json::to_string(user)?);
        Ok(())
    }

    /// Drops the token and profile, e.g. after a 401.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

/// Color theme persisted across reloads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "claro",
            Theme::Dark => "escuro",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "escuro" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// Theme and per-page view mode, persisted for cross-reload continuity.
#[derive(Debug)]
pub struct Preferences<S: LocalStore> {
    store: Arc<S>,
}

impl<S: LocalStore> Clone for Preferences<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: LocalStore> Preferences<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn theme(&self) -> Theme {
        self.store
            .get(THEME_KEY)
            .map(|v| Theme::parse(&v))
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
    }

    pub fn view_mode(&self, page: &str) -> ViewMode {
        self.store
            .get(&format!("visualizacao_{page}"))
            .map(|v| ViewMode::parse(&v))
            .unwrap_or_default()
    }

    pub fn set_view_mode(&self, page: &str, view: ViewMode) {
        self.store.set(&format!("visualizacao_{page}"), view.as_str());
    }
}

/// Local-only annotations keyed by resource and record id.
///
/// Notes never sync to the server and are never evicted; they survive only
/// as long as the backing store does. Free text is sanitized before it is
/// persisted.
#[derive(Debug)]
pub struct Notes<S: LocalStore> {
    store: Arc<S>,
}

impl<S: LocalStore> Clone for Notes<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: LocalStore> Notes<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn key(resource: &str, id: i64) -> String {
        format!("observacoes_{resource}_{id}")
    }

    pub fn get(&self, resource: &str, id: i64) -> Option<String> {
        self.store.get(&Self::key(resource, id))
    }

    /// Sanitizes and stores a note; blank input removes it.
    pub fn save(&self, resource: &str, id: i64, text: &str) {
        let clean = ammonia::clean(text);
        let clean = clean.trim();
        if clean.is_empty() {
            self.store.remove(&Self::key(resource, id));
        } else {
            self.store.set(&Self::key(resource, id), clean);
        }
    }

    pub fn remove(&self, resource: &str, id: i64) {
        self.store.remove(&Self::key(resource, id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_reads_and_clears() {
        let store = Arc::new(MemoryStore::new());
        let session = Session::new(Arc::clone(&store));
        assert!(!session.is_authenticated());

        let profile = UserProfile {
            id: 1,
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            role: UserRole::Admin,
        };
        session.store_session("tok-123", &profile).unwrap();
        assert_eq!(session.token().as_deref(), Some("tok-123"));
        assert_eq!(session.current_user(), Some(profile));

        session.clear();
        assert!(session.token().is_none());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn notes_are_sanitized_before_storage() {
        let store = Arc::new(MemoryStore::new());
        let notes = Notes::new(store);
        notes.save("cliente", 7, "ligar amanhã <script>alert(1)</script>");
        let stored = notes.get("cliente", 7).unwrap();
        assert!(!stored.contains("<script>"));
        assert!(stored.contains("ligar amanhã"));
    }

    #[test]
    fn blank_note_removes_the_entry() {
        let store = Arc::new(MemoryStore::new());
        let notes = Notes::new(store);
        notes.save("cliente", 7, "algo");
        notes.save("cliente", 7, "   ");
        assert_eq!(notes.get("cliente", 7), None);
    }

    #[test]
    fn theme_defaults_to_light() {
        let prefs = Preferences::new(Arc::new(MemoryStore::new()));
        assert_eq!(prefs.theme(), Theme::Light);
        prefs.set_theme(Theme::Dark);
        assert_eq!(prefs.theme(), Theme::Dark);
    }
}
