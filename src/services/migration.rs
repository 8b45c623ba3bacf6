// ============================================================================
// MIGRATION SERVICE - Subida del historial y descarga de los archivos generados
// ============================================================================

use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use wasm_bindgen::JsCast;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::migration::{resolve_download_filename, GeneratedFile, MigrationResponse};
use super::http::{HttpClient, Payload};

/// POST /migrate_and_export_individual con la colección tal cual.
/// Las URLs de los archivos vuelven absolutas respecto al backend principal.
pub async fn migrate_and_export(formularios: &[Value]) -> Result<MigrationResponse, ApiError> {
    log::info!("📤 Migrando {} formularios", formularios.len());
    let client = HttpClient::main();
    let (status, payload) = client
        .post_with_status("/migrate_and_export_individual", formularios)
        .await?;

    if !(200..300).contains(&status) {
        let message = upload_error_message(&payload);
        log::error!("❌ Migración rechazada (HTTP {}): {}", status, message);
        return Err(ApiError::Http { status, message });
    }

    let mut response: MigrationResponse = payload.decode()?;
    let origin = client.base_url().to_string();
    for file in response.files.iter_mut() {
        file.url = file.absolute_url(&origin);
    }
    log::info!("✅ Migración lista: {} archivos generados", response.files.len());
    Ok(response)
}

/// Solo el campo `error` del cuerpo, si no "Error en el servidor"
fn upload_error_message(payload: &Payload) -> String {
    match payload {
        Payload::Json(value) => value
            .get("error")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| "Error en el servidor".to_string()),
        Payload::Text(_) => "Error en el servidor".to_string(),
    }
}

/// Texto del diálogo cuando no se generó ningún archivo
pub fn zero_files_message(response: &MigrationResponse) -> String {
    format!(
        "{} (0 archivos generados)",
        response.message.as_deref().unwrap_or("Migración completada")
    )
}

/// Resultado de "Descargar todos"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DownloadReport {
    pub downloaded: Vec<String>,
    pub failed: Vec<(GeneratedFile, String)>,
}

/// Descarga un archivo y dispara el guardado en el navegador
pub async fn download_file(file: &GeneratedFile) -> Result<String, ApiError> {
    let download = HttpClient::main().download(&file.url).await?;
    let filename = resolve_download_filename(download.content_disposition.as_deref(), &file.url, file);
    save_blob(&download.bytes, download.content_type.as_deref(), &filename)
        .map_err(|e| ApiError::Network(format!("No se pudo guardar {}: {}", filename, e)))?;
    log::info!("💾 Descargado {}", filename);
    Ok(filename)
}

/// Descarga secuencial con pausa fija entre archivos.
/// `on_error` se invoca por cada archivo fallido y la descarga sigue.
pub async fn download_all<F>(files: &[GeneratedFile], mut on_error: F) -> DownloadReport
where
    F: FnMut(&GeneratedFile, &str),
{
    let mut report = DownloadReport::default();
    for file in files {
        match download_file(file).await {
            Ok(filename) => {
                report.downloaded.push(filename);
                TimeoutFuture::new(CONFIG.download_pause_ms).await;
            }
            Err(e) => {
                log::error!("❌ Error descargando {}: {}", file.display_name(), e);
                let message = e.to_string();
                on_error(file, &message);
                report.failed.push((file.clone(), message));
            }
        }
    }
    log::info!(
        "📦 Descarga terminada: {} ok, {} con error",
        report.downloaded.len(),
        report.failed.len()
    );
    report
}

/// Blob → URL de objeto → `<a download>` → click → revocar
fn save_blob(bytes: &[u8], content_type: Option<&str>, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("sin window")?;
    let document = window.document().ok_or("sin document")?;

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    if let Some(content_type) = content_type {
        options.set_type(content_type);
    }
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("{:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "elemento <a> inválido".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
        anchor.click();
        anchor.remove();
    } else {
        anchor.click();
    }

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upload_error_uses_error_field_only() {
        let payload = Payload::Json(json!({"error": "Formulario sin realizaciones", "message": "x"}));
        assert_eq!(upload_error_message(&payload), "Formulario sin realizaciones");
        let payload = Payload::Json(json!({"message": "no se usa"}));
        assert_eq!(upload_error_message(&payload), "Error en el servidor");
        assert_eq!(upload_error_message(&Payload::Text("boom".into())), "Error en el servidor");
    }

    #[test]
    fn zero_files_message_counts_nothing() {
        let response: MigrationResponse =
            serde_json::from_value(json!({"message": "Migración completada", "files": []})).unwrap();
        assert_eq!(zero_files_message(&response), "Migración completada (0 archivos generados)");
        assert_eq!(
            zero_files_message(&MigrationResponse::default()),
            "Migración completada (0 archivos generados)"
        );
    }
}
