use thiserror::Error;

/// Error kinds surfaced by the API client.
///
/// `Network` means the request never completed; `Api` carries the message
/// extracted from a non-2xx response body. A 401 is its own kind because the
/// controllers react to it by clearing the session and redirecting instead
/// of showing a banner.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connect, timeout, aborted body).
    #[error("falha de conexão: {0}")]
    Network(String),

    /// Non-2xx response with a server-supplied message.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The session token is missing, invalid or expired.
    #[error("sessão expirada")]
    Unauthorized,

    /// The body could not be decoded into the expected shape.
    #[error("resposta inválida: {0}")]
    InvalidResponse(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
