use serde::{Deserialize, Serialize};
use serde_json::Value;
use super::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comedor {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub pais: Option<String>,
}

/// Cuerpo de POST /post_comedor
#[derive(Debug, Clone, Serialize)]
pub struct NuevoComedor {
    pub nombre: String,
    pub pais: String,
}

impl NuevoComedor {
    /// Ambos campos son obligatorios
    pub fn new(nombre: &str, pais: &str) -> Option<Self> {
        if nombre.trim().is_empty() || pais.trim().is_empty() {
            return None;
        }
        Some(Self { nombre: nombre.to_string(), pais: pais.to_string() })
    }
}

/// Normaliza las distintas formas de respuesta del backend de comedores:
/// arreglo, `{comedor: {...}}` u objeto suelto
pub fn comedores_from_payload(value: &Value) -> Vec<Comedor> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        Value::Object(map) => {
            let inner = map.get("comedor").unwrap_or(value);
            serde_json::from_value(inner.clone()).into_iter().collect()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_array_payload() {
        let value = json!([
            {"_id": "a1", "nombre": "San José", "pais": "Colombia"},
            {"_id": "b2", "nombre": "La Paz", "pais": "Bolivia"}
        ]);
        let comedores = comedores_from_payload(&value);
        assert_eq!(comedores.len(), 2);
        assert_eq!(comedores[1].id, Some(EntityId::Text("b2".into())));
    }

    #[test]
    fn unwraps_comedor_envelope() {
        let value = json!({"message": "ok", "comedor": {"_id": "z", "nombre": "Nuevo", "pais": "Perú"}});
        let comedores = comedores_from_payload(&value);
        assert_eq!(comedores.len(), 1);
        assert_eq!(comedores[0].nombre.as_deref(), Some("Nuevo"));
    }

    #[test]
    fn single_object_becomes_one_row() {
        let value = json!({"id": 3, "nombre": "Suelto"});
        let comedores = comedores_from_payload(&value);
        assert_eq!(comedores[0].id, Some(EntityId::Int(3)));
        assert_eq!(comedores[0].pais, None);
    }

    #[test]
    fn new_comedor_requires_both_fields() {
        assert!(NuevoComedor::new("Comedor", "").is_none());
        assert!(NuevoComedor::new("  ", "Colombia").is_none());
        assert!(NuevoComedor::new("Comedor", "Colombia").is_some());
    }
}
