// ============================================================================
// USE HISTORY HOOK - Historial local y subida a migración
// ============================================================================

use yew::prelude::*;

use crate::context::{use_alert, AlertContext};
use crate::error::{ApiError, HistoryError};
use crate::models::{AlertDialog, GeneratedFile, MigrationResponse};
use crate::services::migration::{download_all, migrate_and_export, zero_files_message};
use crate::services::survey_store::{clear_history, load_history, load_raw_history, History};
use crate::utils::storage::{BrowserStore, KeyValueStore};

#[derive(Clone)]
pub struct UseHistoryHandle {
    pub history: UseStateHandle<Option<History>>,
    pub uploading: UseStateHandle<bool>,
    pub upload: Callback<()>,
}

/// Diálogo al abrir la vista sin historial utilizable
pub fn load_error_dialog(error: &HistoryError) -> AlertDialog {
    if error.is_no_data() {
        AlertDialog::warning("No hay respuestas", &error.to_string())
    } else {
        AlertDialog::error("Error al cargar", "No se pudo cargar la colección de respuestas.")
    }
}

/// Diálogo cuando la relectura previa a la subida falla
pub fn upload_read_error_dialog(error: &HistoryError) -> AlertDialog {
    match error {
        HistoryError::Missing => AlertDialog::error("No hay datos", "No hay datos válidos guardados en localStorage."),
        HistoryError::Empty => AlertDialog::error(
            "No hay datos",
            "La colección de respuestas no tiene formularios válidos.",
        ),
        _ => connection_error_dialog(),
    }
}

/// Diálogo cuando el backend de migración falla
pub fn upload_error_dialog(error: &ApiError) -> AlertDialog {
    match error {
        ApiError::Http { message, .. } => AlertDialog::error("Error", &format!("❌ Error: {}", message)),
        _ => connection_error_dialog(),
    }
}

fn connection_error_dialog() -> AlertDialog {
    AlertDialog::error(
        "Error",
        "❌ Error al conectar con el servidor o al leer los datos del localStorage.",
    )
}

fn download_error_dialog(file: &GeneratedFile) -> AlertDialog {
    AlertDialog::error(
        "Error en descarga",
        &format!("No se pudo descargar {}. Comprueba el backend y CORS.", file.display_name()),
    )
}

/// Qué sigue tras una migración aceptada
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// Sin archivos: historial ya limpio, solo queda avisar
    Done(AlertDialog),
    /// Hay archivos para ofrecer; la limpieza espera al diálogo
    OfferDownloads(Vec<GeneratedFile>),
}

pub fn upload_outcome<S: KeyValueStore>(store: &S, response: MigrationResponse) -> UploadOutcome {
    if !response.files.is_empty() {
        return UploadOutcome::OfferDownloads(response.files);
    }
    clear_stored_history(store);
    UploadOutcome::Done(AlertDialog::success("Listo", &format!("✅ {}", zero_files_message(&response))))
}

fn clear_stored_history<S: KeyValueStore>(store: &S) {
    if let Err(e) = clear_history(store) {
        log::error!("❌ No se pudo limpiar el historial: {}", e);
    }
}

fn reset_upload(history: &UseStateHandle<Option<History>>, uploading: &UseStateHandle<bool>) {
    history.set(None);
    uploading.set(false);
}

/// Limpieza uniforme: los datos ya quedaron en el servidor
fn finish_upload(history: &UseStateHandle<Option<History>>, uploading: &UseStateHandle<bool>) {
    clear_stored_history(&BrowserStore);
    reset_upload(history, uploading);
}

#[hook]
pub fn use_history() -> UseHistoryHandle {
    let history = use_state(|| None::<History>);
    let uploading = use_state(|| false);
    let alert = use_alert();

    {
        let history = history.clone();
        let alert = alert.clone();
        use_effect_with((), move |_| {
            match load_history(&BrowserStore) {
                Ok(loaded) => history.set(Some(loaded)),
                Err(e) => {
                    log::warn!("⚠️ Historial no disponible: {}", e);
                    alert.show(load_error_dialog(&e));
                }
            }
            || ()
        });
    }

    let upload = {
        let (history, uploading) = (history.clone(), uploading.clone());
        Callback::from(move |_| {
            let (_, formularios) = match load_raw_history(&BrowserStore) {
                Ok(raw) => raw,
                Err(e) => {
                    alert.show(upload_read_error_dialog(&e));
                    return;
                }
            };

            let (history, uploading, alert) = (history.clone(), uploading.clone(), alert.clone());
            uploading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let response = match migrate_and_export(&formularios).await {
                    Ok(response) => response,
                    Err(e) => {
                        alert.show(upload_error_dialog(&e));
                        uploading.set(false);
                        return;
                    }
                };

                match upload_outcome(&BrowserStore, response) {
                    UploadOutcome::Done(dialog) => {
                        reset_upload(&history, &uploading);
                        alert.show(dialog);
                    }
                    UploadOutcome::OfferDownloads(files) => offer_downloads(alert, files, history, uploading),
                }
            });
        })
    };

    UseHistoryHandle { history, uploading, upload }
}

/// "Descargar todos" baja los archivos en secuencia; en ambos casos
/// el historial local se limpia al cerrar el diálogo
fn offer_downloads(
    alert: AlertContext,
    files: Vec<GeneratedFile>,
    history: UseStateHandle<Option<History>>,
    uploading: UseStateHandle<bool>,
) {
    let dialog = AlertDialog::success(
        "Datos migrados",
        &format!(
            "✅ Migradas: {} encuestas. ¿Deseas descargar los archivos ahora?",
            files.len()
        ),
    )
    .confirm("Descargar todos", "Cerrar");

    let on_confirm = {
        let (alert, history, uploading) = (alert.clone(), history.clone(), uploading.clone());
        Callback::from(move |_| {
            let files = files.clone();
            let (alert, history, uploading) = (alert.clone(), history.clone(), uploading.clone());
            wasm_bindgen_futures::spawn_local(async move {
                download_all(&files, |file, _| alert.show(download_error_dialog(file))).await;
                finish_upload(&history, &uploading);
            });
        })
    };

    let on_cancel = Callback::from(move |_| finish_upload(&history, &uploading));

    alert.confirm(dialog, on_confirm, on_cancel);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::models::DialogKind;
    use crate::utils::constants::STORAGE_KEY_RESPUESTAS;
    use crate::utils::storage::memory::MemoryStore;

    #[test]
    fn missing_history_is_a_warning_not_an_error() {
        let dialog = load_error_dialog(&HistoryError::Missing);
        assert_eq!(dialog.kind, DialogKind::Warning);
        assert_eq!(dialog.title, "No hay respuestas");

        let dialog = load_error_dialog(&HistoryError::Malformed("eof".into()));
        assert_eq!(dialog.kind, DialogKind::Error);
        assert_eq!(dialog.title, "Error al cargar");
    }

    #[test]
    fn upload_reread_messages() {
        assert_eq!(
            upload_read_error_dialog(&HistoryError::Empty).text,
            "La colección de respuestas no tiene formularios válidos."
        );
        assert_eq!(
            upload_read_error_dialog(&HistoryError::Storage(StorageError::Unavailable)).title,
            "Error"
        );
    }

    #[test]
    fn server_rejection_shows_its_message() {
        let error = ApiError::Http { status: 400, message: "Error en el servidor".into() };
        assert_eq!(upload_error_dialog(&error).text, "❌ Error: Error en el servidor");
        assert!(upload_error_dialog(&ApiError::Network("offline".into())).text.contains("conectar"));
    }

    #[test]
    fn download_error_names_the_file() {
        let file = GeneratedFile { nombre: Some("Salud".into()), file: None, url: "https://x/f".into() };
        assert_eq!(
            download_error_dialog(&file).text,
            "No se pudo descargar Salud. Comprueba el backend y CORS."
        );
    }

    #[test]
    fn no_generated_files_clears_storage_and_reports_zero() {
        let store = MemoryStore::with(STORAGE_KEY_RESPUESTAS, r#"[{"nombre": "A"}]"#);
        let response = MigrationResponse { message: Some("Migración completada".into()), files: Vec::new() };

        match upload_outcome(&store, response) {
            UploadOutcome::Done(dialog) => {
                assert_eq!(dialog.kind, DialogKind::Success);
                assert_eq!(dialog.text, "✅ Migración completada (0 archivos generados)");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!store.contains(STORAGE_KEY_RESPUESTAS));
    }

    #[test]
    fn generated_files_wait_for_the_dialog_before_clearing() {
        let store = MemoryStore::with(STORAGE_KEY_RESPUESTAS, r#"[{"nombre": "A"}]"#);
        let file = GeneratedFile { nombre: Some("A".into()), file: None, url: "https://x/a".into() };
        let response = MigrationResponse { message: None, files: vec![file.clone()] };

        assert_eq!(upload_outcome(&store, response), UploadOutcome::OfferDownloads(vec![file]));
        assert!(store.contains(STORAGE_KEY_RESPUESTAS));
    }
}
