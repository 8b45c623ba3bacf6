use yew::prelude::*;

use crate::models::LabeledTotal;
use crate::utils::constants::NO_DATA_TEXT;
use crate::viewmodels::chart_viewmodel::{format_count, truncate_label, MAX_LABEL_CHARS};
use crate::viewmodels::ChartViewModel;

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub variant: AttrValue,
    #[prop_or_default]
    pub icon: AttrValue,
}

#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    html! {
        <div class={classes!("metric-card", props.variant.to_string())}>
            <div class="card-icon">{ &props.icon }</div>
            <div class="card-content">
                <p class="card-label">{ &props.label }</p>
                <p class="card-value">{ &props.value }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub title: AttrValue,
    pub items: Vec<LabeledTotal>,
    #[prop_or_default]
    pub color: AttrValue,
    /// Prefijo de cada etiqueta (p.ej. "Estrato ")
    #[prop_or_default]
    pub label_prefix: AttrValue,
    #[prop_or_default]
    pub full_width: bool,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let bars = ChartViewModel::bar_items(&props.items);

    html! {
        <div class={classes!("chart-card", props.full_width.then_some("chart-card-full"))}>
            <h2 class="chart-title">{ &props.title }</h2>
            <div class="bar-chart">
                if bars.is_empty() {
                    <p class="no-data">{ NO_DATA_TEXT }</p>
                } else {
                    { for bars.iter().map(|bar| html! {
                        <div class="bar-item">
                            <div class="bar-label">{ format!("{}{}", props.label_prefix, bar.label) }</div>
                            <div class="bar-wrapper">
                                <div
                                    class={classes!("bar-fill", props.color.to_string())}
                                    style={format!("width: {}%", bar.width_percent)}
                                >
                                    <span class="bar-value">{ format_count(bar.value) }</span>
                                </div>
                            </div>
                        </div>
                    }) }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub title: AttrValue,
    pub items: Vec<LabeledTotal>,
    #[prop_or(AttrValue::Static("Detalle"))]
    pub detail_title: AttrValue,
}

/// Pastel SVG (viewBox 200x200) con leyenda de detalle
#[function_component(PieChart)]
pub fn pie_chart(props: &PieChartProps) -> Html {
    let slices = ChartViewModel::pie_slices(&props.items);

    html! {
        <div class="chart-card chart-card-full">
            <h2 class="chart-title">{ &props.title }</h2>
            if slices.is_empty() {
                <p class="no-data">{ NO_DATA_TEXT }</p>
            } else {
                <div class="pie-container">
                    <svg viewBox="0 0 200 200" class="pie-chart">
                        { for slices.iter().map(|slice| html! {
                            <g>
                                <path d={slice.path.clone()} fill={slice.color} stroke="white" stroke-width="2" />
                                <text
                                    x={slice.label_x.to_string()}
                                    y={slice.label_y.to_string()}
                                    text-anchor="middle"
                                    class="pie-label"
                                >
                                    { format!("{}: {:.0}%", slice.label, slice.percentage) }
                                </text>
                            </g>
                        }) }
                    </svg>
                    <div class="detail-container">
                        <h3 class="detail-title">{ &props.detail_title }</h3>
                        <ul class="pie-legend">
                            { for slices.iter().map(|slice| html! {
                                <li class="legend-item">
                                    <span class="legend-color" style={format!("background-color: {}", slice.color)}></span>
                                    <span class="legend-label">{ truncate_label(&slice.label, MAX_LABEL_CHARS) }</span>
                                    <span class="legend-value">
                                        { format!("{} ({:.1}%)", format_count(slice.value), slice.percentage) }
                                    </span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
            }
        </div>
    }
}
