// ============================================================================
// DASHBOARD - Filtros, payloads del backend de analítica y métricas por modo
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use super::EntityId;

/// Modo de filtro del dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    #[default]
    General,
    Comedor,
    Encargado,
    Encuestas,
}

impl FilterKind {
    pub const ALL: [FilterKind; 4] = [
        FilterKind::General,
        FilterKind::Comedor,
        FilterKind::Encargado,
        FilterKind::Encuestas,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::General => "general",
            FilterKind::Comedor => "comedor",
            FilterKind::Encargado => "encargado",
            FilterKind::Encuestas => "encuestas",
        }
    }

    /// Valores desconocidos caen en General
    pub fn from_select_value(s: &str) -> Self {
        match s {
            "comedor" => FilterKind::Comedor,
            "encargado" => FilterKind::Encargado,
            "encuestas" => FilterKind::Encuestas,
            _ => FilterKind::General,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::General => "General",
            FilterKind::Comedor => "Comedor",
            FilterKind::Encargado => "Encargado",
            FilterKind::Encuestas => "Encuestas",
        }
    }

    pub fn requires_selection(&self) -> bool {
        !matches!(self, FilterKind::General)
    }
}

/// Filtro activo + id seleccionado (vacío = sin selección)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardQuery {
    pub kind: FilterKind,
    pub selected_id: String,
}

impl DashboardQuery {
    pub fn new(kind: FilterKind, selected_id: &str) -> Self {
        Self { kind, selected_id: selected_id.trim().to_string() }
    }

    /// Ruta de métricas; None si el modo necesita un id y no hay
    pub fn endpoint(&self) -> Option<String> {
        let id = self.selected_id.as_str();
        match self.kind {
            FilterKind::General => Some("/api/v1/dashboard/general".to_string()),
            _ if id.is_empty() => None,
            FilterKind::Comedor => Some(format!("/api/v1/dashboard/comedor/{}", id)),
            FilterKind::Encargado => Some(format!("/api/v1/dashboard/encargado/{}", id)),
            FilterKind::Encuestas => Some(format!("/api/v1/dashboard/formulario/{}", id)),
        }
    }
}

/// Par {etiqueta, total} de una colección del dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledTotal {
    pub label: String,
    pub total: f64,
}

impl LabeledTotal {
    pub fn new(label: &str, total: f64) -> Self {
        Self { label: label.to_string(), total }
    }
}

/// Convierte `{etiqueta: conteo}` en una secuencia en el orden del documento.
/// Los valores no numéricos cuentan como 0.
pub fn labeled_totals(map: Option<&Map<String, Value>>) -> Vec<LabeledTotal> {
    map.map(|m| {
        m.iter()
            .map(|(label, value)| LabeledTotal {
                label: label.clone(),
                total: value.as_f64().unwrap_or(0.0),
            })
            .collect()
    })
    .unwrap_or_default()
}

/// Inversa de `labeled_totals`
pub fn totals_to_object(items: &[LabeledTotal]) -> Map<String, Value> {
    items
        .iter()
        .map(|item| (item.label.clone(), serde_json::json!(item.total)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreguntaRanking {
    #[serde(default)]
    pub pregunta: String,
    #[serde(default)]
    pub respuestas: f64,
}

/// Respuesta de GET /api/v1/dashboard/preguntas/{formId}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RespuestaConteo {
    pub respuesta: String,
    pub count: f64,
}

impl RespuestaConteo {
    pub fn demo() -> Vec<Self> {
        [("Opción 1", 120.0), ("Opción 2", 85.0), ("Opción 3", 45.0), ("Opción 4", 15.0)]
            .iter()
            .map(|(respuesta, count)| Self { respuesta: respuesta.to_string(), count: *count })
            .collect()
    }
}

// ----------------------------------------------------------------------------
// Payloads crudos del backend de analítica
// ----------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GeneralPayload {
    total_comedores: Option<f64>,
    total_encargados: Option<f64>,
    total_beneficiarios: Option<f64>,
    total_encuestas: Option<f64>,
    comedores_por_pais: Option<Map<String, Value>>,
    encargados_por_pais: Option<Map<String, Value>>,
    beneficiarios_por_pais: Option<Map<String, Value>>,
    formularios_por_pais: Option<Map<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ComedorPayload {
    comedor_id: Option<EntityId>,
    comedor_nombre: Option<String>,
    total_realizaciones: Option<f64>,
    total_beneficiarios: Option<f64>,
    promedio_beneficiarios_por_realizacion: Option<f64>,
    edades_promedio: Option<f64>,
    distribucion_estrato: Option<Map<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EncargadoPayload {
    encargado_id: Option<EntityId>,
    nombre: Option<String>,
    total_realizaciones: Option<f64>,
    total_beneficiarios: Option<f64>,
    comedores_cargo: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EncuestaPayload {
    id_formulario: Option<EntityId>,
    nombre_encuesta: Option<String>,
    total_realizaciones: Option<f64>,
    total_encuestados: Option<f64>,
    edad_promedio: Option<f64>,
    distribucion_nacionalidad: Option<Map<String, Value>>,
    distribucion_estrato: Option<Map<String, Value>>,
    distribucion_ciudad: Option<Map<String, Value>>,
    top_5_preguntas: Option<Vec<PreguntaRanking>>,
}

// ----------------------------------------------------------------------------
// Métricas por modo
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct GeneralMetrics {
    pub total_comedores: f64,
    pub total_encargados: f64,
    pub total_beneficiarios: f64,
    pub total_encuestas: f64,
    pub comedores_por_pais: Vec<LabeledTotal>,
    pub encargados_por_pais: Vec<LabeledTotal>,
    pub beneficiarios_por_pais: Vec<LabeledTotal>,
    pub formularios_por_pais: Vec<LabeledTotal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComedorMetrics {
    pub comedor_id: Option<EntityId>,
    pub comedor_nombre: Option<String>,
    pub total_realizaciones: f64,
    pub total_beneficiarios: f64,
    pub promedio_beneficiarios_por_realizacion: f64,
    pub edad_promedio: f64,
    pub distribucion_estrato: Vec<LabeledTotal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EncargadoMetrics {
    pub encargado_id: Option<EntityId>,
    pub encargado_nombre: Option<String>,
    pub total_realizaciones: f64,
    pub total_beneficiarios: f64,
    pub comedores_cargo: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EncuestaMetrics {
    pub id_formulario: Option<EntityId>,
    pub nombre_encuesta: Option<String>,
    pub total_realizaciones: f64,
    pub total_encuestados: f64,
    pub edad_promedio: f64,
    pub distribucion_nacionalidad: Vec<LabeledTotal>,
    pub distribucion_estrato: Vec<LabeledTotal>,
    pub distribucion_ciudad: Vec<LabeledTotal>,
    pub top5_preguntas: Vec<PreguntaRanking>,
}

/// Métricas del dashboard, una variante por modo de filtro
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardMetrics {
    General(GeneralMetrics),
    Comedor(ComedorMetrics),
    Encargado(EncargadoMetrics),
    Encuestas(EncuestaMetrics),
}

impl DashboardMetrics {
    pub fn kind(&self) -> FilterKind {
        match self {
            DashboardMetrics::General(_) => FilterKind::General,
            DashboardMetrics::Comedor(_) => FilterKind::Comedor,
            DashboardMetrics::Encargado(_) => FilterKind::Encargado,
            DashboardMetrics::Encuestas(_) => FilterKind::Encuestas,
        }
    }

    /// Transforma el JSON del backend según el modo pedido
    pub fn from_payload(kind: FilterKind, value: Value) -> Result<Self, serde_json::Error> {
        let metrics = match kind {
            FilterKind::General => {
                let data: GeneralPayload = serde_json::from_value(value)?;
                DashboardMetrics::General(GeneralMetrics {
                    total_comedores: data.total_comedores.unwrap_or(0.0),
                    total_encargados: data.total_encargados.unwrap_or(0.0),
                    total_beneficiarios: data.total_beneficiarios.unwrap_or(0.0),
                    total_encuestas: data.total_encuestas.unwrap_or(0.0),
                    comedores_por_pais: labeled_totals(data.comedores_por_pais.as_ref()),
                    encargados_por_pais: labeled_totals(data.encargados_por_pais.as_ref()),
                    beneficiarios_por_pais: labeled_totals(data.beneficiarios_por_pais.as_ref()),
                    formularios_por_pais: labeled_totals(data.formularios_por_pais.as_ref()),
                })
            }
            FilterKind::Comedor => {
                let data: ComedorPayload = serde_json::from_value(value)?;
                DashboardMetrics::Comedor(ComedorMetrics {
                    comedor_id: data.comedor_id,
                    comedor_nombre: data.comedor_nombre,
                    total_realizaciones: data.total_realizaciones.unwrap_or(0.0),
                    total_beneficiarios: data.total_beneficiarios.unwrap_or(0.0),
                    promedio_beneficiarios_por_realizacion: data
                        .promedio_beneficiarios_por_realizacion
                        .unwrap_or(0.0),
                    edad_promedio: data.edades_promedio.unwrap_or(0.0),
                    distribucion_estrato: labeled_totals(data.distribucion_estrato.as_ref()),
                })
            }
            FilterKind::Encargado => {
                let data: EncargadoPayload = serde_json::from_value(value)?;
                DashboardMetrics::Encargado(EncargadoMetrics {
                    encargado_id: data.encargado_id,
                    encargado_nombre: data.nombre,
                    total_realizaciones: data.total_realizaciones.unwrap_or(0.0),
                    total_beneficiarios: data.total_beneficiarios.unwrap_or(0.0),
                    comedores_cargo: data.comedores_cargo.unwrap_or(0.0),
                })
            }
            FilterKind::Encuestas => {
                let data: EncuestaPayload = serde_json::from_value(value)?;
                DashboardMetrics::Encuestas(EncuestaMetrics {
                    id_formulario: data.id_formulario,
                    nombre_encuesta: data.nombre_encuesta,
                    total_realizaciones: data.total_realizaciones.unwrap_or(0.0),
                    total_encuestados: data.total_encuestados.unwrap_or(0.0),
                    edad_promedio: data.edad_promedio.unwrap_or(0.0),
                    distribucion_nacionalidad: labeled_totals(data.distribucion_nacionalidad.as_ref()),
                    distribucion_estrato: labeled_totals(data.distribucion_estrato.as_ref()),
                    distribucion_ciudad: labeled_totals(data.distribucion_ciudad.as_ref()),
                    top5_preguntas: data.top_5_preguntas.unwrap_or_default(),
                })
            }
        };
        Ok(metrics)
    }

    /// Datos de ejemplo cuando el backend de analítica no responde
    pub fn demo(query: &DashboardQuery) -> Self {
        match query.kind {
            FilterKind::General => DashboardMetrics::General(demo::general()),
            FilterKind::Comedor => DashboardMetrics::Comedor(demo::comedor()),
            FilterKind::Encargado => DashboardMetrics::Encargado(demo::encargado()),
            FilterKind::Encuestas => DashboardMetrics::Encuestas(EncuestaMetrics {
                id_formulario: Some(EntityId::Text(query.selected_id.clone())),
                nombre_encuesta: None,
                total_realizaciones: 0.0,
                total_encuestados: 0.0,
                edad_promedio: 0.0,
                distribucion_nacionalidad: Vec::new(),
                distribucion_estrato: Vec::new(),
                distribucion_ciudad: Vec::new(),
                top5_preguntas: Vec::new(),
            }),
        }
    }
}

/// Datos de demo para el dashboard
pub mod demo {
    use super::*;

    fn por_pais(values: [f64; 5]) -> Vec<LabeledTotal> {
        ["Guatemala", "Honduras", "El Salvador", "Nicaragua", "Costa Rica"]
            .iter()
            .zip(values)
            .map(|(pais, total)| LabeledTotal::new(pais, total))
            .collect()
    }

    pub fn general() -> GeneralMetrics {
        GeneralMetrics {
            total_comedores: 45.0,
            total_encargados: 128.0,
            total_beneficiarios: 3542.0,
            total_encuestas: 892.0,
            comedores_por_pais: por_pais([15.0, 12.0, 8.0, 6.0, 4.0]),
            encargados_por_pais: por_pais([42.0, 35.0, 25.0, 16.0, 10.0]),
            beneficiarios_por_pais: por_pais([1250.0, 980.0, 620.0, 412.0, 280.0]),
            formularios_por_pais: por_pais([320.0, 245.0, 175.0, 102.0, 50.0]),
        }
    }

    pub fn comedor() -> ComedorMetrics {
        ComedorMetrics {
            comedor_id: Some(EntityId::from("ejemplo123")),
            comedor_nombre: Some("Comedor Ejemplo".to_string()),
            total_realizaciones: 15.0,
            total_beneficiarios: 245.0,
            promedio_beneficiarios_por_realizacion: 16.3,
            edad_promedio: 42.5,
            distribucion_estrato: vec![
                LabeledTotal::new("1", 80.0),
                LabeledTotal::new("2", 95.0),
                LabeledTotal::new("3", 50.0),
                LabeledTotal::new("4", 15.0),
                LabeledTotal::new("5", 5.0),
            ],
        }
    }

    pub fn encargado() -> EncargadoMetrics {
        EncargadoMetrics {
            encargado_id: Some(EntityId::from("12345678")),
            encargado_nombre: Some("Encargado Ejemplo".to_string()),
            total_realizaciones: 8.0,
            total_beneficiarios: 156.0,
            comedores_cargo: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_per_filter() {
        assert_eq!(
            DashboardQuery::new(FilterKind::General, "").endpoint().as_deref(),
            Some("/api/v1/dashboard/general")
        );
        assert_eq!(
            DashboardQuery::new(FilterKind::Encuestas, "f-1").endpoint().as_deref(),
            Some("/api/v1/dashboard/formulario/f-1")
        );
        assert_eq!(DashboardQuery::new(FilterKind::Comedor, "  ").endpoint(), None);
    }

    #[test]
    fn filter_kind_parses_select_values() {
        for kind in FilterKind::ALL {
            assert_eq!(FilterKind::from_select_value(kind.as_str()), kind);
        }
        assert_eq!(FilterKind::from_select_value("otro"), FilterKind::General);
    }

    #[test]
    fn labeled_totals_keep_document_order_and_invert() {
        let raw = r#"{"Honduras": 12, "Colombia": 30, "Bolivia": 0}"#;
        let map: Map<String, Value> = serde_json::from_str(raw).unwrap();
        let items = labeled_totals(Some(&map));

        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Honduras", "Colombia", "Bolivia"]);
        assert_eq!(items[1].total, 30.0);

        let back = totals_to_object(&items);
        assert_eq!(back.len(), map.len());
        for (key, value) in &map {
            assert_eq!(back[key].as_f64(), value.as_f64());
        }
    }

    #[test]
    fn general_payload_reshapes_collections() {
        let value = json!({
            "total_comedores": 3,
            "total_encargados": 5,
            "total_beneficiarios": 40,
            "comedores_por_pais": {"Perú": 2, "Chile": 1},
            "beneficiarios_por_pais": {"Perú": 30, "Chile": 10}
        });
        let metrics = DashboardMetrics::from_payload(FilterKind::General, value).unwrap();
        match metrics {
            DashboardMetrics::General(m) => {
                assert_eq!(m.total_comedores, 3.0);
                assert_eq!(m.total_encuestas, 0.0);
                assert_eq!(m.comedores_por_pais[0], LabeledTotal::new("Perú", 2.0));
                assert!(m.encargados_por_pais.is_empty());
                assert!(m.formularios_por_pais.is_empty());
            }
            other => panic!("modo inesperado: {:?}", other.kind()),
        }
    }

    #[test]
    fn comedor_payload_maps_ages_and_strata() {
        let value = json!({
            "comedor_id": "c1",
            "comedor_nombre": "Las Flores",
            "total_realizaciones": 4,
            "edades_promedio": 37.25,
            "distribucion_estrato": {"1": 10, "2": 4}
        });
        let DashboardMetrics::Comedor(m) = DashboardMetrics::from_payload(FilterKind::Comedor, value).unwrap() else {
            panic!("se esperaba comedor");
        };
        assert_eq!(m.edad_promedio, 37.25);
        assert_eq!(m.promedio_beneficiarios_por_realizacion, 0.0);
        assert_eq!(m.distribucion_estrato.len(), 2);
    }

    #[test]
    fn encuesta_payload_keeps_top_five_order() {
        let value = json!({
            "id_formulario": 9,
            "nombre_encuesta": "Hábitos",
            "top_5_preguntas": [
                {"pregunta": "¿Edad?", "respuestas": 10},
                {"pregunta": "¿Ciudad?", "respuestas": 30}
            ],
            "distribucion_ciudad": {"Lima": 3}
        });
        let DashboardMetrics::Encuestas(m) = DashboardMetrics::from_payload(FilterKind::Encuestas, value).unwrap() else {
            panic!("se esperaba encuestas");
        };
        assert_eq!(m.top5_preguntas[0].pregunta, "¿Edad?");
        assert_eq!(m.top5_preguntas[1].respuestas, 30.0);
        assert_eq!(m.distribucion_ciudad, vec![LabeledTotal::new("Lima", 3.0)]);
    }

    #[test]
    fn null_totals_default_to_zero() {
        let value = json!({"encargado_id": "77", "nombre": null, "total_beneficiarios": null});
        let DashboardMetrics::Encargado(m) = DashboardMetrics::from_payload(FilterKind::Encargado, value).unwrap() else {
            panic!("se esperaba encargado");
        };
        assert_eq!(m.total_beneficiarios, 0.0);
        assert_eq!(m.encargado_nombre, None);
    }

    #[test]
    fn general_demo_dataset() {
        let DashboardMetrics::General(m) = DashboardMetrics::demo(&DashboardQuery::default()) else {
            panic!("se esperaba general");
        };
        assert_eq!(
            (m.total_comedores, m.total_encargados, m.total_beneficiarios, m.total_encuestas),
            (45.0, 128.0, 3542.0, 892.0)
        );
        assert_eq!(m.beneficiarios_por_pais.len(), 5);
    }

    #[test]
    fn demo_matches_requested_mode() {
        for kind in FilterKind::ALL {
            let query = DashboardQuery::new(kind, "x");
            assert_eq!(DashboardMetrics::demo(&query).kind(), kind);
        }
    }
}
