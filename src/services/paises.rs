use serde_json::Value;

use crate::error::ApiError;
use crate::models::pais::{sort_paises, Pais, PaisRequest};
use super::http::{HttpClient, Payload};

/// GET /pais ordenado por nombre
pub async fn fetch_paises() -> Result<Vec<Pais>, ApiError> {
    log::info!("🌎 Cargando países...");
    let payload = HttpClient::main().get("/pais").await?;
    let mut paises = paises_from_payload(payload.into_json()?);
    sort_paises(&mut paises);
    log::info!("✅ {} países cargados", paises.len());
    Ok(paises)
}

/// POST /pais. Cualquier 2xx cuenta como creado, aunque el cuerpo sea texto
pub async fn post_pais(nombre: &str) -> Result<Payload, ApiError> {
    let nombre = validate_nombre(nombre)?;
    log::info!("➕ Creando país: {}", nombre);
    HttpClient::main().post("/pais", &PaisRequest { nombre }).await
}

/// POST /pais desde el selector, que necesita el país creado en JSON.
/// Devuelve `None` si el backend no lo incluye
pub async fn create_pais(nombre: &str) -> Result<Option<Pais>, ApiError> {
    selector_created(post_pais(nombre).await?)
}

fn selector_created(payload: Payload) -> Result<Option<Pais>, ApiError> {
    if !payload.is_json() {
        return Err(ApiError::Parse("respuesta inválida (no JSON)".to_string()));
    }
    Ok(created_pais(payload))
}

/// PUT /pais/{id}
pub async fn update_pais(id: &str, nombre: &str) -> Result<(), ApiError> {
    let nombre = validate_nombre(nombre)?;
    log::info!("✏️ Actualizando país {} → {}", id, nombre);
    HttpClient::main()
        .put(&format!("/pais/{}", id), &PaisRequest { nombre })
        .await?;
    Ok(())
}

/// DELETE /pais/{id}
pub async fn delete_pais(id: &str) -> Result<(), ApiError> {
    log::info!("🗑️ Eliminando país {}", id);
    HttpClient::main().delete(&format!("/pais/{}", id)).await?;
    Ok(())
}

fn validate_nombre(nombre: &str) -> Result<String, ApiError> {
    let nombre = nombre.trim();
    if nombre.is_empty() {
        return Err(ApiError::Validation("El nombre del país no puede estar vacío".to_string()));
    }
    Ok(nombre.to_string())
}

/// Acepta un arreglo o `{paises: [...]}`; descarta entradas sin id/nombre
fn paises_from_payload(value: Value) -> Vec<Pais> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("paises") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

/// El backend responde `{id, nombre}` o `{pais: {id, nombre}}`
fn created_pais(payload: Payload) -> Option<Pais> {
    let value = payload.into_json().ok()?;
    let inner = match value {
        Value::Object(ref map) if map.contains_key("pais") => map.get("pais").cloned()?,
        other => other,
    };
    serde_json::from_value(inner).ok()
}
