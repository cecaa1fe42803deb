//! Normalization of the inconsistent response envelopes.
//!
//! Endpoints wrap collections differently: `{"clientes": [...]}` here,
//! `{"data": [...]}` there, sometimes a bare array. The unwrap helpers try
//! the resource's named field, then `data`, then the first array-valued
//! field, then the body itself, so the rest of the crate only ever sees a
//! typed collection.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::errors::{ApiError, ApiResult};

/// Unwraps a collection response into a typed vector.
pub(crate) fn unwrap_collection<T: DeserializeOwned>(body: Value, field: &str) -> ApiResult<Vec<T>> {
    let collection = match body {
        Value::Array(_) => body,
        Value::Object(ref map) => {
            if let Some(value) = map.get(field).filter(|v| v.is_array()) {
                value.clone()
            } else if let Some(value) = map.get("data").filter(|v| v.is_array()) {
                value.clone()
            } else if let Some(value) = map.values().find(|v| v.is_array()) {
                value.clone()
            } else {
                return Err(ApiError::InvalidResponse(format!(
                    "nenhuma coleção no envelope (esperado `{field}`)"
                )));
            }
        }
        _ => {
            return Err(ApiError::InvalidResponse(
                "corpo não é objeto nem lista".to_string(),
            ));
        }
    };

    serde_json::from_value(collection).map_err(|err| ApiError::InvalidResponse(err.to_string()))
}

/// Unwraps a single-record response (mutation echo) into a typed value.
pub(crate) fn unwrap_record<T: DeserializeOwned>(body: Value, field: &str) -> ApiResult<T> {
    let record = match &body {
        Value::Object(map) => map
            .get(field)
            .or_else(|| map.get("data"))
            .filter(|v| v.is_object())
            .cloned()
            .unwrap_or(body),
        _ => body,
    };

    serde_json::from_value(record).map_err(|err| ApiError::InvalidResponse(err.to_string()))
}

/// Extracts a human-readable message from an error body, falling back to the
/// HTTP status reason. Servers are inconsistent about the field name, so the
/// known spellings are tried in preference order.
pub(crate) fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message", "erro", "detalhes"] {
            if let Some(Value::String(message)) = map.get(key) {
                if !message.is_empty() {
                    return message.clone();
                }
            }
        }
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::domain::client::Client;

    use super::*;

    #[test]
    fn unwraps_named_field() {
        let body = json!({"clientes": [{"id": 1, "nome": "A"}]});
        let clients: Vec<Client> = unwrap_collection(body, "clientes").unwrap();
        assert_eq!(clients.len(), 1);
    }

    #[test]
    fn falls_back_to_data_field() {
        let body = json!({"data": [{"id": 1, "nome": "A"}]});
        let clients: Vec<Client> = unwrap_collection(body, "clientes").unwrap();
        assert_eq!(clients[0].name, "A");
    }

    #[test]
    fn falls_back_to_first_array_field() {
        let body = json!({"total": 1, "registros": [{"id": 1, "nome": "A"}]});
        let clients: Vec<Client> = unwrap_collection(body, "clientes").unwrap();
        assert_eq!(clients.len(), 1);
    }

    #[test]
    fn accepts_bare_array() {
        let body = json!([{"id": 1, "nome": "A"}]);
        let clients: Vec<Client> = unwrap_collection(body, "clientes").unwrap();
        assert_eq!(clients.len(), 1);
    }

    #[test]
    fn rejects_envelope_without_collection() {
        let body = json!({"ok": true});
        let result: ApiResult<Vec<Client>> = unwrap_collection(body, "clientes");
        assert!(matches!(result, Err(ApiError::InvalidResponse(_))));
    }

    #[test]
    fn error_message_prefers_known_fields_in_order() {
        let status = StatusCode::BAD_REQUEST;
        assert_eq!(
            error_message(r#"{"message": "b", "error": "a"}"#, status),
            "a"
        );
        assert_eq!(error_message(r#"{"erro": "c"}"#, status), "c");
        assert_eq!(error_message(r#"{"detalhes": "d"}"#, status), "d");
        assert_eq!(error_message("not json", status), "Bad Request");
    }
}
