// ============================================================================
// USE DASHBOARD HOOK - Filtros, listas y métricas por modo
// ============================================================================
// Las métricas se recalculan en cada cambio de filtro; nunca se cachean
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::models::{
    Comedor, DashboardMetrics, DashboardQuery, Encargado, FilterKind, FormularioResumen, RespuestaConteo,
};
use crate::services::dashboard::{
    comedores_for_filter, fetch_dashboard_metrics, fetch_respuestas_por_pregunta, list_encargados,
    list_formularios, metrics_or_demo, respuestas_or_demo,
};

/// Distribución de respuestas de una pregunta del top 5
#[derive(Debug, Clone, PartialEq)]
pub struct PreguntaDetalle {
    pub pregunta: String,
    pub respuestas: Option<Vec<RespuestaConteo>>,
}

#[derive(Clone)]
pub struct UseDashboardHandle {
    pub query: UseStateHandle<DashboardQuery>,
    pub metrics: UseStateHandle<Option<DashboardMetrics>>,
    pub loading: UseStateHandle<bool>,
    pub comedores: UseStateHandle<Vec<Comedor>>,
    pub encargados: UseStateHandle<Vec<Encargado>>,
    pub formularios: UseStateHandle<Vec<FormularioResumen>>,
    pub detalle: UseStateHandle<Option<PreguntaDetalle>>,
    pub set_filter: Callback<FilterKind>,
    pub select: Callback<String>,
    pub select_pregunta: Callback<String>,
}

#[hook]
pub fn use_dashboard() -> UseDashboardHandle {
    let query = use_state(DashboardQuery::default);
    let metrics = use_state(|| None::<DashboardMetrics>);
    let loading = use_state(|| true);
    let comedores = use_state(Vec::<Comedor>::new);
    let encargados = use_state(Vec::<Encargado>::new);
    let formularios = use_state(Vec::<FormularioResumen>::new);
    let detalle = use_state(|| None::<PreguntaDetalle>);
    // Solo la última petición puede escribir las métricas / el detalle
    let generation = use_mut_ref(|| 0u32);
    let detalle_generation = use_mut_ref(|| 0u32);

    // Listas de los filtros (una vez)
    {
        let (comedores, encargados, formularios) = (comedores.clone(), encargados.clone(), formularios.clone());
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                comedores.set(comedores_for_filter().await);
            });
            wasm_bindgen_futures::spawn_local(async move {
                encargados.set(list_encargados().await.unwrap_or_else(|e| {
                    log::error!("❌ Error al obtener encargados: {}", e);
                    Vec::new()
                }));
            });
            wasm_bindgen_futures::spawn_local(async move {
                formularios.set(list_formularios().await.unwrap_or_else(|e| {
                    log::error!("❌ Error al obtener formularios: {}", e);
                    Vec::new()
                }));
            });
            || ()
        });
    }

    // Métricas en cada cambio de filtro o selección
    {
        let (metrics, loading) = (metrics.clone(), loading.clone());
        let generation = generation.clone();
        use_effect_with((*query).clone(), move |current: &DashboardQuery| {
            let current = current.clone();
            let ticket = next_generation(&generation);
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_dashboard_metrics(&current).await;
                if !is_current(&generation, ticket) {
                    log::debug!("⏭️ Métricas obsoletas descartadas ({})", current.kind.as_str());
                    return;
                }
                metrics.set(metrics_or_demo(&current, result));
                loading.set(false);
            });
            || ()
        });
    }

    let set_filter = {
        let (query, detalle) = (query.clone(), detalle.clone());
        let detalle_generation = detalle_generation.clone();
        Callback::from(move |kind: FilterKind| {
            next_generation(&detalle_generation);
            query.set(DashboardQuery::new(kind, ""));
            detalle.set(None);
        })
    };

    let select = {
        let (query, detalle) = (query.clone(), detalle.clone());
        let detalle_generation = detalle_generation.clone();
        Callback::from(move |id: String| {
            next_generation(&detalle_generation);
            query.set(DashboardQuery::new(query.kind, &id));
            detalle.set(None);
        })
    };

    let select_pregunta = {
        let (query, detalle) = (query.clone(), detalle.clone());
        let detalle_generation = detalle_generation.clone();
        Callback::from(move |pregunta: String| {
            let form_id = query.selected_id.clone();
            if form_id.is_empty() {
                return;
            }
            let ticket = next_generation(&detalle_generation);
            detalle.set(Some(PreguntaDetalle { pregunta: pregunta.clone(), respuestas: None }));
            let detalle = detalle.clone();
            let detalle_generation = detalle_generation.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let respuestas = respuestas_or_demo(fetch_respuestas_por_pregunta(&form_id, &pregunta).await);
                if !is_current(&detalle_generation, ticket) {
                    log::debug!("⏭️ Respuestas obsoletas descartadas: {}", pregunta);
                    return;
                }
                detalle.set(Some(PreguntaDetalle { pregunta, respuestas: Some(respuestas) }));
            });
        })
    };

    UseDashboardHandle {
        query,
        metrics,
        loading,
        comedores,
        encargados,
        formularios,
        detalle,
        set_filter,
        select,
        select_pregunta,
    }
}

fn next_generation(generation: &Rc<RefCell<u32>>) -> u32 {
    let mut current = generation.borrow_mut();
    *current = current.wrapping_add(1);
    *current
}

fn is_current(generation: &Rc<RefCell<u32>>, ticket: u32) -> bool {
    *generation.borrow() == ticket
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generations_increase() {
        let generation = Rc::new(RefCell::new(0));
        assert_eq!(next_generation(&generation), 1);
        assert_eq!(next_generation(&generation), 2);
    }

    #[test]
    fn filter_change_invalidates_pending_detail() {
        let generation = Rc::new(RefCell::new(0));
        let pregunta_a = next_generation(&generation);
        assert!(is_current(&generation, pregunta_a));

        // cambio de encuesta o de filtro mientras la respuesta viaja
        next_generation(&generation);
        assert!(!is_current(&generation, pregunta_a));
    }

    #[test]
    fn only_last_clicked_question_is_kept() {
        let generation = Rc::new(RefCell::new(0));
        let primera = next_generation(&generation);
        let segunda = next_generation(&generation);
        assert!(!is_current(&generation, primera));
        assert!(is_current(&generation, segunda));
    }
}
