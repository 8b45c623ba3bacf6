// ============================================================================
// SURVEY STORE - Historial local de respuestas (`respuestas`) y formularios (`forms`)
// ============================================================================
// Lectura con migración: arreglo plano = versión 0,
// `{version, formularios}` = envoltorio versionado
// ============================================================================

use serde_json::Value;

use crate::error::{HistoryError, StorageError};
use crate::models::formulario::{history_entries, total_encuestados, Formulario, HistoryEntry};
use crate::utils::constants::{HISTORY_SCHEMA_VERSION, STORAGE_KEY_FORMS, STORAGE_KEY_RESPUESTAS};
use crate::utils::storage::{remove_from_storage, KeyValueStore};

/// Historial ya validado, listo para mostrar
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    pub version: u32,
    pub formularios: Vec<Formulario>,
}

impl History {
    pub fn total_encuestados(&self) -> usize {
        total_encuestados(&self.formularios)
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        history_entries(&self.formularios)
    }
}

/// Lee la colección cruda tal como se subirá al backend.
/// Ausente/vacía → `Missing`/`Empty`; JSON inválido → `Malformed`.
pub fn load_raw_history<S: KeyValueStore>(store: &S) -> Result<(u32, Vec<Value>), HistoryError> {
    let raw = store
        .get_item(STORAGE_KEY_RESPUESTAS)?
        .filter(|raw| !raw.trim().is_empty())
        .ok_or(HistoryError::Missing)?;

    let value: Value = serde_json::from_str(&raw).map_err(|e| HistoryError::Malformed(e.to_string()))?;
    let (version, items) = migrate(value)?;

    if items.is_empty() {
        return Err(HistoryError::Empty);
    }
    Ok((version, items))
}

/// Lee y tipa el historial
pub fn load_history<S: KeyValueStore>(store: &S) -> Result<History, HistoryError> {
    let (version, items) = load_raw_history(store)?;
    let formularios = items
        .into_iter()
        .map(serde_json::from_value::<Formulario>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| HistoryError::Malformed(e.to_string()))?;

    log::info!(
        "📚 Historial v{} cargado: {} formularios, {} encuestados",
        version,
        formularios.len(),
        total_encuestados(&formularios)
    );
    Ok(History { version, formularios })
}

/// Borra el historial (tras migrarlo al servidor)
pub fn clear_history<S: KeyValueStore>(store: &S) -> Result<(), StorageError> {
    log::info!("🧹 Limpiando historial local");
    remove_from_storage(store, STORAGE_KEY_RESPUESTAS)
}

/// Definiciones guardadas en `forms`; ausente o vacío → lista vacía
pub fn load_stored_forms<S: KeyValueStore>(store: &S) -> Result<Vec<Value>, HistoryError> {
    let Some(raw) = store.get_item(STORAGE_KEY_FORMS)? else {
        return Ok(Vec::new());
    };
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(_) => Ok(Vec::new()),
        Err(e) => Err(HistoryError::Malformed(e.to_string())),
    }
}

fn migrate(value: Value) -> Result<(u32, Vec<Value>), HistoryError> {
    match value {
        Value::Null => Err(HistoryError::Missing),
        Value::Array(items) => Ok((0, items)),
        Value::Object(mut map) => {
            let version = map
                .get("version")
                .and_then(Value::as_u64)
                .ok_or_else(|| HistoryError::Malformed("falta la versión del historial".to_string()))?
                as u32;
            if version > HISTORY_SCHEMA_VERSION {
                return Err(HistoryError::Malformed(format!("versión {} no soportada", version)));
            }
            match map.remove("formularios") {
                Some(Value::Array(items)) => Ok((version, items)),
                None | Some(Value::Null) => Ok((version, Vec::new())),
                Some(_) => Err(HistoryError::Malformed("`formularios` no es un arreglo".to_string())),
            }
        }
        _ => Err(HistoryError::Malformed("se esperaba un arreglo de formularios".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::memory::MemoryStore;
    use serde_json::json;

    fn form(nombre: &str, encuestados: usize) -> Value {
        let encuestados: Vec<Value> = (0..encuestados)
            .map(|i| json!({"fechaRealizacion": "2025-05-02T14:30:00Z", "edad": 20 + i}))
            .collect();
        json!({
            "nombre": nombre,
            "Realizaciones": [{"nombre_encargado": "Marta", "id_comedor": 4, "encuestados": encuestados}]
        })
    }

    fn store_with(value: Value) -> MemoryStore {
        MemoryStore::with(STORAGE_KEY_RESPUESTAS, &value.to_string())
    }

    #[test]
    fn legacy_array_totals_every_respondent() {
        let store = store_with(json!([form("Nutrición", 3), form("Vivienda", 2)]));
        let history = load_history(&store).unwrap();
        assert_eq!(history.version, 0);
        assert_eq!(history.total_encuestados(), 5);
        assert_eq!(history.entries().len(), 5);
        assert_eq!(history.entries()[0].comedor, "4");
    }

    #[test]
    fn null_respondent_lists_do_not_break_the_history() {
        let store = store_with(json!([
            {"Realizaciones": [{"encuestados": [{}, {}, {}]}]},
            {"Realizaciones": [{"encuestados": null}]}
        ]));
        let history = load_history(&store).unwrap();
        assert_eq!(history.total_encuestados(), 3);
    }

    #[test]
    fn versioned_envelope_is_read() {
        let store = store_with(json!({"version": 1, "formularios": [form("Salud", 1)]}));
        let history = load_history(&store).unwrap();
        assert_eq!(history.version, 1);
        assert_eq!(history.formularios[0].nombre.as_deref(), Some("Salud"));
    }

    #[test]
    fn absent_blank_or_empty_storage_means_no_data() {
        assert_eq!(load_history(&MemoryStore::default()), Err(HistoryError::Missing));
        assert_eq!(load_history(&MemoryStore::with(STORAGE_KEY_RESPUESTAS, "   ")), Err(HistoryError::Missing));
        let empty = load_history(&store_with(json!([]))).unwrap_err();
        assert_eq!(empty, HistoryError::Empty);
        assert!(empty.is_no_data());
        let empty_envelope = load_history(&store_with(json!({"version": 1, "formularios": []})));
        assert_eq!(empty_envelope, Err(HistoryError::Empty));
    }

    #[test]
    fn malformed_storage_is_reported_and_left_untouched() {
        let store = MemoryStore::with(STORAGE_KEY_RESPUESTAS, "[{\"nombre\": ");
        let err = load_history(&store).unwrap_err();
        assert!(matches!(err, HistoryError::Malformed(_)));
        assert!(!err.is_no_data());
        assert!(store.contains(STORAGE_KEY_RESPUESTAS));

        let future = store_with(json!({"version": 99, "formularios": [form("X", 1)]}));
        assert!(matches!(load_history(&future), Err(HistoryError::Malformed(_))));
    }

    #[test]
    fn raw_history_keeps_unknown_fields() {
        let store = store_with(json!([{"nombre": "A", "Realizaciones": [], "origen": "tablet-3"}]));
        let (_, items) = load_raw_history(&store).unwrap();
        assert_eq!(items[0]["origen"], "tablet-3");
    }

    #[test]
    fn clear_removes_the_key() {
        let store = store_with(json!([form("A", 1)]));
        clear_history(&store).unwrap();
        assert!(!store.contains(STORAGE_KEY_RESPUESTAS));
    }

    #[test]
    fn stored_forms_default_to_empty() {
        assert!(load_stored_forms(&MemoryStore::default()).unwrap().is_empty());
        let store = MemoryStore::with(STORAGE_KEY_FORMS, r#"[{"id": "f1", "name": "Censo"}]"#);
        assert_eq!(load_stored_forms(&store).unwrap().len(), 1);
        let broken = MemoryStore::with(STORAGE_KEY_FORMS, "{");
        assert!(load_stored_forms(&broken).is_err());
    }
}
