// ============================================================================
// DASHBOARD SERVICE - Listas de filtros y métricas del backend de analítica
// ============================================================================

use serde_json::Value;

use crate::error::ApiError;
use crate::models::{
    Comedor, DashboardMetrics, DashboardQuery, Encargado, FormularioResumen, RespuestaConteo,
};
use super::comedores::list_comedores;
use super::http::HttpClient;

/// Comedores para el filtro; cualquier fallo → lista vacía
pub async fn comedores_for_filter() -> Vec<Comedor> {
    list_comedores().await.unwrap_or_else(|e| {
        log::error!("❌ Error al obtener comedores: {}", e);
        Vec::new()
    })
}

/// GET /all_manager
pub async fn list_encargados() -> Result<Vec<Encargado>, ApiError> {
    let value = HttpClient::main().get("/all_manager").await?.into_json()?;
    let encargados = rows_from_value(value);
    log::info!("👤 {} encargados recibidos", encargados.len());
    Ok(encargados)
}

/// GET /get_forms_list
pub async fn list_formularios() -> Result<Vec<FormularioResumen>, ApiError> {
    let value = HttpClient::main().get("/get_forms_list").await?.into_json()?;
    let formularios = rows_from_value(value);
    log::info!("📋 {} formularios recibidos", formularios.len());
    Ok(formularios)
}

/// Métricas del modo pedido. `Ok(None)` si el modo necesita un id
/// y todavía no hay selección (no se hace ninguna petición)
pub async fn fetch_dashboard_metrics(query: &DashboardQuery) -> Result<Option<DashboardMetrics>, ApiError> {
    let Some(endpoint) = query.endpoint() else {
        return Ok(None);
    };
    log::info!("📊 Cargando métricas {} {}", query.kind.as_str(), query.selected_id);
    let value = HttpClient::analytics().get(&endpoint).await?.into_json()?;
    let metrics = DashboardMetrics::from_payload(query.kind, value)
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(Some(metrics))
}

/// GET /api/v1/dashboard/preguntas/{formId}?pregunta=…
pub async fn fetch_respuestas_por_pregunta(form_id: &str, pregunta: &str) -> Result<Vec<RespuestaConteo>, ApiError> {
    let encoded = String::from(js_sys::encode_uri_component(pregunta));
    let path = format!("/api/v1/dashboard/preguntas/{}?pregunta={}", form_id, encoded);
    HttpClient::analytics().get(&path).await?.decode()
}

/// Aplica el fallback de demo cuando el backend de analítica falla
pub fn metrics_or_demo(
    query: &DashboardQuery,
    result: Result<Option<DashboardMetrics>, ApiError>,
) -> Option<DashboardMetrics> {
    match result {
        Ok(metrics) => metrics,
        Err(e) => {
            log::warn!("⚠️ Métricas no disponibles ({}), usando datos de ejemplo", e);
            Some(DashboardMetrics::demo(query))
        }
    }
}

pub fn respuestas_or_demo(result: Result<Vec<RespuestaConteo>, ApiError>) -> Vec<RespuestaConteo> {
    result.unwrap_or_else(|e| {
        log::warn!("⚠️ Respuestas por pregunta no disponibles ({}), usando ejemplo", e);
        RespuestaConteo::demo()
    })
}

/// Un arreglo de filas; las que no encajan en el modelo se descartan
fn rows_from_value<T: serde::de::DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityId, FilterKind};
    use serde_json::json;

    #[test]
    fn failed_general_metrics_fall_back_to_demo() {
        let query = DashboardQuery::new(FilterKind::General, "");
        let metrics = metrics_or_demo(&query, Err(ApiError::Timeout(10_000)));
        match metrics {
            Some(DashboardMetrics::General(general)) => {
                assert_eq!(general.total_comedores, 45.0);
                assert_eq!(general.total_encargados, 128.0);
                assert_eq!(general.total_beneficiarios, 3542.0);
                assert_eq!(general.total_encuestas, 892.0);
            }
            other => panic!("unexpected metrics: {:?}", other),
        }
    }

    #[test]
    fn failed_survey_metrics_are_empty_for_requested_id() {
        let query = DashboardQuery::new(FilterKind::Encuestas, "f-12");
        match metrics_or_demo(&query, Err(ApiError::Network("down".into()))) {
            Some(DashboardMetrics::Encuestas(encuesta)) => {
                assert_eq!(encuesta.id_formulario, Some(EntityId::Text("f-12".into())));
                assert!(encuesta.top5_preguntas.is_empty());
            }
            other => panic!("unexpected metrics: {:?}", other),
        }
    }

    #[test]
    fn missing_selection_stays_empty() {
        let query = DashboardQuery::new(FilterKind::Comedor, "");
        assert_eq!(metrics_or_demo(&query, Ok(None)), None);
    }

    #[test]
    fn respuestas_fall_back_to_demo_options() {
        let respuestas = respuestas_or_demo(Err(ApiError::Timeout(10_000)));
        assert_eq!(respuestas.len(), 4);
        assert_eq!(respuestas[0].count, 120.0);
    }

    #[test]
    fn encargado_rows_skip_bad_entries() {
        let encargados: Vec<Encargado> = rows_from_value(json!([
            {"identificacion": 101, "nombreCompleto": "Laura Gómez"},
            {"nombre": "sin identificación"},
            {"identificacion": "CC-9", "nombre": "Pedro"}
        ]));
        assert_eq!(encargados.len(), 2);
        assert_eq!(encargados[1].display_name(), "Pedro");
        let none: Vec<Encargado> = rows_from_value(json!({"error": "x"}));
        assert!(none.is_empty());
    }
}
