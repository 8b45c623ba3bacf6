use serde_json::json;

use crate::error::ApiError;
use crate::models::comedor::{comedores_from_payload, Comedor, NuevoComedor};
use super::http::HttpClient;

/// POST /post_comedor. Devuelve las filas que el backend confirma
pub async fn create_comedor(nombre: &str, pais: &str) -> Result<Vec<Comedor>, ApiError> {
    let nuevo = NuevoComedor::new(nombre, pais).ok_or_else(|| {
        ApiError::Validation("Nombre y país son obligatorios".to_string())
    })?;
    log::info!("🍽️ Creando comedor {} ({})", nuevo.nombre, nuevo.pais);
    let value = HttpClient::main().post("/post_comedor", &nuevo).await?.into_json()?;
    Ok(comedores_from_payload(&value))
}

/// GET /find_comedores
pub async fn list_comedores() -> Result<Vec<Comedor>, ApiError> {
    let value = HttpClient::main().get("/find_comedores").await?.into_json()?;
    let comedores = comedores_from_payload(&value);
    log::info!("✅ {} comedores cargados", comedores.len());
    Ok(comedores)
}

/// POST /find_comedores_by_ids `{ids}`
pub async fn find_comedores_by_ids(ids: &[String]) -> Result<Vec<Comedor>, ApiError> {
    let value = HttpClient::main()
        .post("/find_comedores_by_ids", &json!({ "ids": ids }))
        .await?
        .into_json()?;
    Ok(comedores_from_payload(&value))
}

/// POST /find_comedores_by_name `{nombre}`
pub async fn find_comedores_by_name(nombre: &str) -> Result<Vec<Comedor>, ApiError> {
    let value = HttpClient::main()
        .post("/find_comedores_by_name", &json!({ "nombre": nombre }))
        .await?
        .into_json()?;
    Ok(comedores_from_payload(&value))
}
