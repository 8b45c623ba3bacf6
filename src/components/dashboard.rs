use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::charts::{BarChart, MetricCard, PieChart};
use crate::hooks::{use_dashboard, PreguntaDetalle, UseDashboardHandle};
use crate::models::{
    ComedorMetrics, DashboardMetrics, EncargadoMetrics, EncuestaMetrics, FilterKind, GeneralMetrics,
    LabeledTotal, PreguntaRanking,
};
use crate::utils::constants::NO_DATA_TEXT;
use crate::viewmodels::chart_viewmodel::{format_count, truncate_label, MAX_LABEL_CHARS};
use crate::viewmodels::ChartViewModel;

fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Segundo selector según el modo (comedor, encargado o encuesta)
fn render_id_selector(handle: &UseDashboardHandle) -> Html {
    let query = &*handle.query;
    let onchange = {
        let select = handle.select.clone();
        Callback::from(move |e: Event| select.emit(select_value(&e)))
    };

    let (placeholder, options): (&str, Vec<(String, String)>) = match query.kind {
        FilterKind::General => return html! {},
        FilterKind::Comedor => (
            "Seleccione un comedor",
            handle
                .comedores
                .iter()
                .filter_map(|c| {
                    let id = c.id.as_ref()?.to_string();
                    Some((id, c.nombre.clone().unwrap_or_default()))
                })
                .collect(),
        ),
        FilterKind::Encargado => (
            "Seleccione un encargado",
            handle
                .encargados
                .iter()
                .map(|e| (e.identificacion.to_string(), e.display_name()))
                .collect(),
        ),
        FilterKind::Encuestas => (
            "Seleccione una encuesta",
            handle
                .formularios
                .iter()
                .map(|f| (f.id_formulario.to_string(), f.nombre.clone()))
                .collect(),
        ),
    };

    html! {
        <select class="filter-select" onchange={onchange}>
            <option value="" selected={query.selected_id.is_empty()}>{ placeholder }</option>
            { for options.into_iter().map(|(id, nombre)| {
                let selected = id == query.selected_id;
                html! { <option key={id.clone()} value={id} selected={selected}>{ nombre }</option> }
            }) }
        </select>
    }
}

fn render_general(m: &GeneralMetrics) -> Html {
    html! {
        <>
            <div class="cards-grid">
                <MetricCard label="TOTAL COMEDORES" value={format_count(m.total_comedores)} variant="card-comedores" icon="🍽️" />
                <MetricCard label="TOTAL ENCARGADOS" value={format_count(m.total_encargados)} variant="card-encargados" icon="👤" />
                <MetricCard label="TOTAL BENEFICIARIOS" value={format_count(m.total_beneficiarios)} variant="card-beneficiarios" icon="❤️" />
                <MetricCard label="TOTAL ENCUESTAS" value={format_count(m.total_encuestas)} variant="card-encuestas" icon="📋" />
            </div>
            <div class="charts-grid">
                <BarChart title="Comedores por País" items={m.comedores_por_pais.clone()} color="bar-fill-green" />
                <BarChart title="Encargados por País" items={m.encargados_por_pais.clone()} color="bar-fill-blue" />
                if !m.formularios_por_pais.is_empty() {
                    <BarChart title="Formularios por País" items={m.formularios_por_pais.clone()} color="bar-fill-purple" />
                }
                <PieChart title="Beneficiarios por País" items={m.beneficiarios_por_pais.clone()} detail_title="Detalle por país" />
            </div>
        </>
    }
}

fn render_comedor(m: &ComedorMetrics) -> Html {
    html! {
        <>
            <div class="comedor-header">
                <h2 class="comedor-title">{ m.comedor_nombre.clone().unwrap_or_else(|| "Comedor".to_string()) }</h2>
            </div>
            <div class="cards-grid">
                <MetricCard label="TOTAL REALIZACIONES" value={format_count(m.total_realizaciones)} variant="card-comedores" icon="📋" />
                <MetricCard label="TOTAL BENEFICIARIOS" value={format_count(m.total_beneficiarios)} variant="card-beneficiarios" icon="❤️" />
                <MetricCard label="PROMEDIO POR REALIZACIÓN" value={format!("{:.1}", m.promedio_beneficiarios_por_realizacion)} variant="card-encargados" icon="👤" />
                <MetricCard label="EDAD PROMEDIO" value={format!("{:.1}", m.edad_promedio)} variant="card-encuestas" icon="🎂" />
            </div>
            <div class="charts-grid">
                <BarChart
                    title="Distribución por Estrato"
                    items={m.distribucion_estrato.clone()}
                    color="bar-fill-purple"
                    label_prefix="Estrato "
                    full_width=true
                />
            </div>
        </>
    }
}

fn render_encargado(m: &EncargadoMetrics) -> Html {
    let identificacion = m
        .encargado_id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    html! {
        <>
            <div class="comedor-header">
                <h2 class="comedor-title">{ m.encargado_nombre.clone().unwrap_or_else(|| "Encargado".to_string()) }</h2>
            </div>
            <div class="cards-grid">
                <MetricCard label="IDENTIFICACIÓN" value={identificacion} variant="card-encargados" icon="🪪" />
                <MetricCard label="TOTAL REALIZACIONES" value={format_count(m.total_realizaciones)} variant="card-comedores" icon="📋" />
                <MetricCard label="TOTAL BENEFICIARIOS" value={format_count(m.total_beneficiarios)} variant="card-beneficiarios" icon="❤️" />
                <MetricCard label="COMEDORES A CARGO" value={format_count(m.comedores_cargo)} variant="card-encuestas" icon="🏠" />
            </div>
        </>
    }
}

fn render_top5(preguntas: &[PreguntaRanking], on_select: &Callback<String>) -> Html {
    if preguntas.is_empty() {
        return html! { <p class="no-data">{ NO_DATA_TEXT }</p> };
    }
    let totals: Vec<LabeledTotal> = preguntas
        .iter()
        .map(|p| LabeledTotal::new(&p.pregunta, p.respuestas))
        .collect();
    let bars = ChartViewModel::bar_items(&totals);

    html! {
        { for bars.into_iter().map(|bar| {
            let on_select = on_select.clone();
            let pregunta = bar.label.clone();
            html! {
                <div class="bar-item clickable" title={bar.label.clone()}
                     onclick={Callback::from(move |_| on_select.emit(pregunta.clone()))}>
                    <div class="bar-label">{ truncate_label(&bar.label, MAX_LABEL_CHARS) }</div>
                    <div class="bar-wrapper">
                        <div class="bar-fill bar-fill-pink" style={format!("width: {}%", bar.width_percent)}>
                            <span class="bar-value">{ format_count(bar.value) }</span>
                        </div>
                    </div>
                </div>
            }
        }) }
    }
}

fn render_detalle(detalle: &Option<PreguntaDetalle>) -> Html {
    let Some(detalle) = detalle else {
        return html! {};
    };
    match &detalle.respuestas {
        None => html! {
            <div class="chart-card chart-card-full">
                <p class="loading-text">{ format!("Cargando respuestas de \"{}\"...", truncate_label(&detalle.pregunta, MAX_LABEL_CHARS)) }</p>
            </div>
        },
        Some(respuestas) => {
            let items: Vec<LabeledTotal> = respuestas
                .iter()
                .map(|r| LabeledTotal::new(&r.respuesta, r.count))
                .collect();
            html! {
                <PieChart
                    title={truncate_label(&detalle.pregunta, MAX_LABEL_CHARS)}
                    items={items}
                    detail_title="Respuestas"
                />
            }
        }
    }
}

fn render_encuestas(m: &EncuestaMetrics, handle: &UseDashboardHandle) -> Html {
    html! {
        <>
            <div class="comedor-header">
                <h2 class="comedor-title">{ m.nombre_encuesta.clone().unwrap_or_else(|| "Encuesta".to_string()) }</h2>
            </div>
            <div class="cards-grid">
                <MetricCard label="TOTAL REALIZACIONES" value={format_count(m.total_realizaciones)} variant="card-comedores" icon="📋" />
                <MetricCard label="TOTAL ENCUESTADOS" value={format_count(m.total_encuestados)} variant="card-beneficiarios" icon="👥" />
                <MetricCard label="EDAD PROMEDIO" value={format!("{:.1}", m.edad_promedio)} variant="card-encuestas" icon="🎂" />
            </div>
            <div class="charts-grid">
                <BarChart title="Distribución por Nacionalidad" items={m.distribucion_nacionalidad.clone()} color="bar-fill-blue" />
                <BarChart title="Distribución por Estrato" items={m.distribucion_estrato.clone()} color="bar-fill-purple" label_prefix="Estrato " />
                <BarChart title="Distribución por Ciudad" items={m.distribucion_ciudad.clone()} color="bar-fill-green" />
                <div class="chart-card">
                    <h2 class="chart-title">{"Top 5 Preguntas Más Respondidas"}</h2>
                    <div class="bar-chart">
                        { render_top5(&m.top5_preguntas, &handle.select_pregunta) }
                    </div>
                </div>
                { render_detalle(&handle.detalle) }
            </div>
        </>
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let handle = use_dashboard();

    let on_filter = {
        let set_filter = handle.set_filter.clone();
        Callback::from(move |e: Event| set_filter.emit(FilterKind::from_select_value(&select_value(&e))))
    };

    let kind = handle.query.kind;
    let body = if *handle.loading {
        html! {
            <div class="loading-container">
                <p class="loading-text">{"Cargando métricas..."}</p>
            </div>
        }
    } else {
        match &*handle.metrics {
            None => html! {},
            // Métricas de otro modo todavía en pantalla: no se mezclan
            Some(metrics) if metrics.kind() != kind => html! {},
            Some(DashboardMetrics::General(m)) => render_general(m),
            Some(DashboardMetrics::Comedor(m)) => render_comedor(m),
            Some(DashboardMetrics::Encargado(m)) => render_encargado(m),
            Some(DashboardMetrics::Encuestas(m)) => render_encuestas(m, &handle),
        }
    };

    html! {
        <div class="dashboard">
            <div class="dashboard-header">
                <h1 class="title">{"DASHBOARD"}</h1>
                <div class="filter-container">
                    <label for="filterType" class="filter-label">{"Filtrar por:"}</label>
                    <select id="filterType" class="filter-select" onchange={on_filter}>
                        { for FilterKind::ALL.iter().map(|k| html! {
                            <option value={k.as_str()} selected={*k == kind}>{ k.label() }</option>
                        }) }
                    </select>
                    { render_id_selector(&handle) }
                </div>
            </div>
            <div class="metrics-container">
                { body }
            </div>
        </div>
    }
}
