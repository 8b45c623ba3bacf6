// ============================================================================
// HTTP CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Dos backends: principal (CRUD) y analítica (dashboard)
// Cada llamador decide su fallback, aquí no hay reintentos
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use web_sys::AbortController;

use crate::config::CONFIG;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Main,
    Analytics,
}

impl Backend {
    pub fn base_url(&self) -> String {
        match self {
            Backend::Main => CONFIG.main_backend_url.clone(),
            Backend::Analytics => CONFIG.analytics_backend_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Cuerpo de respuesta decodificado
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Vacío → `{}`, JSON válido → Json, resto → Text
    pub fn parse(text: &str) -> Self {
        if text.trim().is_empty() {
            return Payload::Json(Value::Object(Map::new()));
        }
        match serde_json::from_str(text) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Text(text.to_string()),
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Payload::Json(_))
    }

    pub fn into_json(self) -> Result<Value, ApiError> {
        match self {
            Payload::Json(value) => Ok(value),
            Payload::Text(_) => Err(ApiError::Parse("respuesta inválida (no JSON)".to_string())),
        }
    }

    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let value = self.into_json()?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Mensaje de error de una respuesta no-2xx: `error`, luego `message`,
/// luego el texto crudo, luego `Error {status}`
pub fn extract_error_message(text: &str, status: u16) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text) {
        for key in ["error", "message"] {
            match map.get(key) {
                Some(Value::String(s)) if !s.is_empty() => return s.clone(),
                Some(Value::Null) | None => {}
                Some(Value::String(_)) => {}
                Some(other) => return other.to_string(),
            }
        }
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        format!("Error {}", status)
    } else {
        trimmed.to_string()
    }
}

/// Archivo binario descargado
#[derive(Debug, Clone)]
pub struct Download {
    pub bytes: Vec<u8>,
    pub content_disposition: Option<String>,
    pub content_type: Option<String>,
}

/// Cliente HTTP ligado a un backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    timeout_ms: Option<u32>,
}

impl HttpClient {
    pub fn new(backend: Backend) -> Self {
        let timeout_ms = match backend {
            Backend::Main => None,
            Backend::Analytics => Some(CONFIG.request_timeout_ms),
        };
        Self { base_url: backend.base_url(), timeout_ms }
    }

    pub fn main() -> Self {
        Self::new(Backend::Main)
    }

    pub fn analytics() -> Self {
        Self::new(Backend::Analytics)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> Result<Payload, ApiError> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Payload, ApiError> {
        let body = to_body(body)?;
        self.request(Method::Post, path, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Payload, ApiError> {
        let body = to_body(body)?;
        self.request(Method::Put, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Payload, ApiError> {
        self.request(Method::Delete, path, None).await
    }

    /// GET binario sobre una URL absoluta
    pub async fn download(&self, url: &str) -> Result<Download, ApiError> {
        log::info!("⬇️ Descargando {}", url);
        let response = self.send(Method::Get, url, None).await?;
        let status = response.status();

        if !response.ok() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::Http { status, message: extract_error_message(&text, status) });
        }

        let headers = response.headers();
        let content_disposition = headers.get("content-disposition");
        let content_type = headers.get("content-type");
        let bytes = response
            .binary()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Download { bytes, content_disposition, content_type })
    }

    /// POST que no convierte los no-2xx en error: devuelve estado y cuerpo
    pub async fn post_with_status<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(u16, Payload), ApiError> {
        let body = to_body(body)?;
        let (status, text) = self.exchange(Method::Post, path, Some(body)).await?;
        Ok((status, Payload::parse(&text)))
    }

    async fn request(&self, method: Method, path: &str, body: Option<String>) -> Result<Payload, ApiError> {
        let (status, text) = self.exchange(method, path, body).await?;

        if !(200..300).contains(&status) {
            let message = extract_error_message(&text, status);
            log::warn!("⚠️ {:?} {} → HTTP {}: {}", method, path, status, message);
            return Err(ApiError::Http { status, message });
        }

        Ok(Payload::parse(&text))
    }

    async fn exchange(&self, method: Method, path: &str, body: Option<String>) -> Result<(u16, String), ApiError> {
        let url = self.url(path);
        log::debug!("🌐 {:?} {}", method, url);

        let response = self.send(method, &url, body).await?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok((response.status(), text))
    }

    async fn send(&self, method: Method, url: &str, body: Option<String>) -> Result<Response, ApiError> {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };

        let Some(timeout_ms) = self.timeout_ms else {
            return dispatch(builder, body).await;
        };

        let controller = AbortController::new()
            .map_err(|_| ApiError::Network("AbortController no disponible".to_string()))?;
        let timed_out = Rc::new(Cell::new(false));

        // El Timeout se cancela al soltarse si la respuesta llega antes
        let _guard = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            Timeout::new(timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let builder = builder.abort_signal(Some(&controller.signal()));
        match dispatch(builder, body).await {
            Err(_) if timed_out.get() => {
                log::warn!("⏱️ Timeout de {} ms en {}", timeout_ms, url);
                Err(ApiError::Timeout(timeout_ms))
            }
            other => other,
        }
    }
}

async fn dispatch(builder: RequestBuilder, body: Option<String>) -> Result<Response, ApiError> {
    let request = match body {
        Some(json) => builder.header("Content-Type", "application/json").body(json),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Serialization(e.to_string()))?;

    request.send().await.map_err(|e| {
        log::error!("❌ Error de red: {}", e);
        ApiError::Network(e.to_string())
    })
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_is_empty_object() {
        assert_eq!(Payload::parse(""), Payload::Json(json!({})));
        assert_eq!(Payload::parse("  \n"), Payload::Json(json!({})));
    }

    #[test]
    fn non_json_body_is_text() {
        let payload = Payload::parse("<html>Bad Gateway</html>");
        assert_eq!(payload, Payload::Text("<html>Bad Gateway</html>".to_string()));
        assert!(!payload.is_json());
        assert!(matches!(payload.into_json(), Err(ApiError::Parse(_))));
    }

    #[test]
    fn decodes_typed_payload() {
        #[derive(serde::Deserialize)]
        struct Created {
            id: i64,
        }
        let created: Created = Payload::parse(r#"{"id": 7, "nombre": "Colombia"}"#).decode().unwrap();
        assert_eq!(created.id, 7);
    }

    #[test]
    fn error_message_prefers_error_field() {
        let body = r#"{"error": "País duplicado", "message": "ignored"}"#;
        assert_eq!(extract_error_message(body, 409), "País duplicado");
    }

    #[test]
    fn error_message_falls_back_to_message_then_text() {
        assert_eq!(extract_error_message(r#"{"message": "No encontrado"}"#, 404), "No encontrado");
        assert_eq!(extract_error_message("Internal Server Error", 500), "Internal Server Error");
        assert_eq!(extract_error_message(r#"{"detail": "x"}"#, 422), r#"{"detail": "x"}"#);
    }

    #[test]
    fn error_message_uses_status_for_empty_body() {
        assert_eq!(extract_error_message("", 502), "Error 502");
    }
}
