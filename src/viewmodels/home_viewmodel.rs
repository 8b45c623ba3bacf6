// ============================================================================
// HOME VIEWMODEL - Lista de formularios disponibles para llenar
// ============================================================================
// SOLO lógica de preparación de datos - Sin estado
// ============================================================================

use serde_json::Value;

const SIN_TITULO: &str = "Sin título";
const COMEDOR_DESCONOCIDO: &str = "Comedor desconocido";

#[derive(Debug, Clone, PartialEq)]
pub struct FormListItem {
    pub id: String,
    pub title: String,
    pub comedor_nombre: String,
    pub comedor_id: String,
}

impl FormListItem {
    pub fn key(&self) -> String {
        format!("{}-{}", self.id, self.comedor_id)
    }
}

pub struct HomeViewModel;

impl HomeViewModel {
    /// Prioridad: selección agrupada por comedor del contexto,
    /// luego los formularios guardados, luego la selección plana
    pub fn form_list(stored: &[Value], selection: &[Value]) -> Vec<FormListItem> {
        let grouped = selection
            .first()
            .map(|entry| entry.get("comedor").map_or(false, |c| !c.is_null()))
            .unwrap_or(false);

        if grouped {
            selection
                .iter()
                .flat_map(|entry| Self::grouped_items(entry, stored))
                .collect()
        } else if !stored.is_empty() {
            stored.iter().map(Self::ungrouped_item).collect()
        } else {
            selection.iter().map(Self::ungrouped_item).collect()
        }
    }

    fn grouped_items(entry: &Value, stored: &[Value]) -> Vec<FormListItem> {
        let comedor = entry.get("comedor");
        let comedor_nombre = comedor
            .and_then(|c| c.get("nombre"))
            .and_then(Value::as_str)
            .unwrap_or(COMEDOR_DESCONOCIDO)
            .to_string();
        let comedor_id = comedor.and_then(|c| c.get("id")).map(id_string).unwrap_or_default();

        let Some(Value::Array(formularios)) = entry.get("formularios") else {
            return Vec::new();
        };

        formularios
            .iter()
            .map(|seleccion| {
                let id = seleccion.get("id").map(id_string).unwrap_or_default();
                let definicion = stored
                    .iter()
                    .find(|f| f.get("id").map(id_string).as_deref() == Some(id.as_str()));
                let title = definicion
                    .and_then(title_of)
                    .or_else(|| str_field(seleccion, "name"))
                    .unwrap_or_else(|| SIN_TITULO.to_string());
                FormListItem {
                    id,
                    title,
                    comedor_nombre: comedor_nombre.clone(),
                    comedor_id: comedor_id.clone(),
                }
            })
            .collect()
    }

    fn ungrouped_item(form: &Value) -> FormListItem {
        FormListItem {
            id: form.get("id").map(id_string).unwrap_or_default(),
            title: title_of(form).unwrap_or_else(|| SIN_TITULO.to_string()),
            comedor_nombre: COMEDOR_DESCONOCIDO.to_string(),
            comedor_id: String::new(),
        }
    }
}

/// `name`, luego `data.title`, luego `data.name`
fn title_of(form: &Value) -> Option<String> {
    str_field(form, "name")
        .or_else(|| form.get("data").and_then(|d| str_field(d, "title")))
        .or_else(|| form.get("data").and_then(|d| str_field(d, "name")))
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn id_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grouped_selection_takes_titles_from_stored_definitions() {
        let stored = vec![json!({"id": "f1", "data": {"title": "Censo nutricional"}})];
        let selection = vec![json!({
            "comedor": {"id": 12, "nombre": "Comedor Esperanza"},
            "formularios": [{"id": "f1", "name": "viejo"}, {"id": "f2", "name": "Vivienda"}, {"id": "f3"}]
        })];

        let items = HomeViewModel::form_list(&stored, &selection);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "Censo nutricional");
        assert_eq!(items[0].comedor_nombre, "Comedor Esperanza");
        assert_eq!(items[0].key(), "f1-12");
        assert_eq!(items[1].title, "Vivienda");
        assert_eq!(items[2].title, "Sin título");
    }

    #[test]
    fn stored_forms_are_listed_without_grouping() {
        let stored = vec![json!({"id": 5, "name": "Salud"}), json!({"id": 6, "data": {"name": "Empleo"}})];
        let items = HomeViewModel::form_list(&stored, &[]);
        assert_eq!(items[0].id, "5");
        assert_eq!(items[1].title, "Empleo");
        assert!(items.iter().all(|i| i.comedor_nombre == "Comedor desconocido"));
    }

    #[test]
    fn flat_selection_is_last_resort() {
        let selection = vec![json!({"id": "a", "name": "Educación"})];
        let items = HomeViewModel::form_list(&[], &selection);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Educación");
        assert!(HomeViewModel::form_list(&[], &[]).is_empty());
    }
}
