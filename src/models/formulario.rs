use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use super::EntityId;

/// Entrada de GET /get_forms_list (filtro de encuestas del dashboard)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormularioResumen {
    pub id_formulario: EntityId,
    #[serde(default)]
    pub nombre: String,
}

/// Formulario llenado guardado en localStorage (`respuestas`).
/// Los campos desconocidos se conservan para subirlos tal cual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formulario {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(rename = "Realizaciones", default, deserialize_with = "null_as_empty")]
    pub realizaciones: Vec<Realizacion>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Realizacion {
    #[serde(default)]
    pub nombre_encargado: Option<String>,
    #[serde(default)]
    pub nombre_comedor: Option<String>,
    #[serde(default)]
    pub id_comedor: Option<EntityId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub encuestados: Vec<Encuestado>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encuestado {
    #[serde(rename = "fechaRealizacion", default)]
    pub fecha_realizacion: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `null` cuenta como lista vacía, igual que una clave ausente
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Realizacion {
    pub fn comedor_label(&self) -> String {
        self.nombre_comedor
            .clone()
            .filter(|n| !n.is_empty())
            .or_else(|| self.id_comedor.as_ref().map(|id| id.to_string()))
            .unwrap_or_else(|| "No disponible".to_string())
    }

    pub fn encargado_label(&self) -> String {
        self.nombre_encargado
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "No disponible".to_string())
    }
}

/// Total de encuestados: suma de `encuestados.len()` de cada realización
pub fn total_encuestados(formularios: &[Formulario]) -> usize {
    formularios
        .iter()
        .flat_map(|f| f.realizaciones.iter())
        .map(|r| r.encuestados.len())
        .sum()
}

/// Una fila del historial (formulario, realización, encuestado)
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub form_index: usize,
    pub realizacion_index: usize,
    pub encuestado_index: usize,
    pub form_name: String,
    pub fecha: String,
    pub colaborador: String,
    pub comedor: String,
}

pub fn history_entries(formularios: &[Formulario]) -> Vec<HistoryEntry> {
    let mut entries = Vec::new();
    for (fi, form) in formularios.iter().enumerate() {
        for (ri, realizacion) in form.realizaciones.iter().enumerate() {
            for (ei, encuestado) in realizacion.encuestados.iter().enumerate() {
                entries.push(HistoryEntry {
                    form_index: fi,
                    realizacion_index: ri,
                    encuestado_index: ei,
                    form_name: form.nombre.clone().unwrap_or_default(),
                    fecha: format_fecha(encuestado.fecha_realizacion.as_deref()),
                    colaborador: realizacion.encargado_label(),
                    comedor: realizacion.comedor_label(),
                });
            }
        }
    }
    entries
}

/// Formatea la fecha RFC 3339 guardada por el formulario
pub fn format_fecha(raw: Option<&str>) -> String {
    match raw {
        Some(raw) => match chrono::DateTime::parse_from_rfc3339(raw) {
            Ok(date) => date.format("%d/%m/%Y, %H:%M:%S").to_string(),
            Err(_) => raw.to_string(),
        },
        None => "Sin fecha".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn forms_with(counts: &[usize]) -> Vec<Formulario> {
        counts
            .iter()
            .map(|&n| {
                let encuestados: Vec<Value> = (0..n)
                    .map(|i| json!({"fechaRealizacion": "2025-03-01T10:00:00Z", "respuesta": i}))
                    .collect();
                serde_json::from_value(json!({
                    "nombre": "Encuesta",
                    "Realizaciones": [{"nombre_encargado": "Ana", "encuestados": encuestados}]
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn total_sums_every_encuestado() {
        assert_eq!(total_encuestados(&forms_with(&[3, 2])), 5);
        assert_eq!(total_encuestados(&[]), 0);
    }

    #[test]
    fn missing_arrays_count_as_zero() {
        let forms: Vec<Formulario> =
            serde_json::from_value(json!([{"nombre": "Vacío"}, {"Realizaciones": [{}]}])).unwrap();
        assert_eq!(total_encuestados(&forms), 0);
    }

    #[test]
    fn unknown_fields_survive_roundtrip() {
        let raw = json!({
            "id": "f1",
            "nombre": "Encuesta",
            "Realizaciones": [{"id_comedor": "c9", "encuestados": [{"edad": 30}]}]
        });
        let form: Formulario = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&form).unwrap()["id"], json!("f1"));
        assert_eq!(form.realizaciones[0].encuestados[0].extra["edad"], json!(30));
    }

    #[test]
    fn entries_flatten_with_labels() {
        let forms: Vec<Formulario> = serde_json::from_value(json!([{
            "nombre": "Nutrición",
            "Realizaciones": [{"id_comedor": 12, "encuestados": [{}, {}]}]
        }])).unwrap();
        let entries = history_entries(&forms);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].encuestado_index, 1);
        assert_eq!(entries[0].comedor, "12");
        assert_eq!(entries[0].colaborador, "No disponible");
        assert_eq!(entries[0].fecha, "Sin fecha");
    }

    #[test]
    fn null_lists_count_as_empty() {
        let forms: Vec<Formulario> = serde_json::from_value(json!([
            {"Realizaciones": [{"encuestados": [{}, {}, {}]}]},
            {"Realizaciones": [{"encuestados": null}]},
            {"Realizaciones": null}
        ])).unwrap();
        assert_eq!(total_encuestados(&forms), 3);
        assert!(forms[2].realizaciones.is_empty());
    }

    #[test]
    fn formats_rfc3339_dates() {
        assert_eq!(format_fecha(Some("2025-03-01T10:05:09Z")), "01/03/2025, 10:05:09");
        assert_eq!(format_fecha(Some("ayer")), "ayer");
    }
}
