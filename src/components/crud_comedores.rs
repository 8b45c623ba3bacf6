use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::header::View;
use super::pais_selector::PaisSelector;
use crate::hooks::{use_comedores, ComedorResult};
use crate::models::Comedor;

#[derive(Properties, PartialEq)]
pub struct CrudComedoresProps {
    pub on_navigate: Callback<View>,
}

fn text_input(set: &Callback<String>) -> Callback<InputEvent> {
    let set = set.clone();
    Callback::from(move |e: InputEvent| set.emit(e.target_unchecked_into::<HtmlInputElement>().value()))
}

fn trigger(action: &Callback<()>) -> Callback<MouseEvent> {
    let action = action.clone();
    Callback::from(move |_| action.emit(()))
}

fn render_fila(comedor: &Comedor) -> Html {
    let or_na = |value: Option<String>| value.filter(|v| !v.is_empty()).unwrap_or_else(|| "N/A".to_string());
    html! {
        <tr>
            <td class="value-cell">{ or_na(comedor.id.as_ref().map(|id| id.to_string())) }</td>
            <td class="value-cell">{ or_na(comedor.nombre.clone()) }</td>
            <td class="value-cell">{ or_na(comedor.pais.clone()) }</td>
        </tr>
    }
}

fn render_resultado(resultado: &Option<ComedorResult>) -> Html {
    match resultado {
        None => html! {},
        Some(ComedorResult::Error(message)) => html! {
            <div class="result-container">
                <p class="error">{ format!("Error: {}", message) }</p>
            </div>
        },
        Some(ComedorResult::Rows(rows)) if rows.is_empty() => html! {
            <div class="result-container">
                <p>{"No hay datos para mostrar."}</p>
            </div>
        },
        Some(ComedorResult::Rows(rows)) => html! {
            <div class="result-container">
                <h3>{"Resultado:"}</h3>
                <table class="result-table">
                    <thead>
                        <tr>
                            <th class="key-cell">{"ID"}</th>
                            <th class="key-cell">{"Nombre"}</th>
                            <th class="key-cell">{"País"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.iter().map(render_fila) }
                    </tbody>
                </table>
            </div>
        },
    }
}

#[function_component(CrudComedores)]
pub fn crud_comedores(props: &CrudComedoresProps) -> Html {
    let handle = use_comedores();

    let gestionar_paises = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(View::Paises))
    };

    html! {
        <div class="container">
            <h2 class="title">{"Gestor de Comedores"}</h2>

            <PaisSelector on_change={handle.set_pais.clone()} />

            <div class="form-group">
                <label class="label">{"Buscar Comedores:"}</label>
                <input
                    class="input"
                    type="text"
                    placeholder="Nombre del comedor"
                    value={(*handle.nombre).clone()}
                    oninput={text_input(&handle.set_nombre)}
                />
            </div>

            <div class="form-group">
                <label class="label">{"IDs (separados por coma):"}</label>
                <input
                    class="input"
                    type="text"
                    placeholder="64f1..., 64f2..."
                    value={(*handle.ids).clone()}
                    oninput={text_input(&handle.set_ids)}
                />
            </div>

            <div class="button-group">
                <button class="button" onclick={trigger(&handle.create)}>{"Crear Comedor"}</button>
                <button class="button" onclick={trigger(&handle.list_all)}>{"Listar Todos"}</button>
                <button class="button" onclick={trigger(&handle.search_by_name)}>{"Buscar por Nombre"}</button>
                <button class="button" onclick={trigger(&handle.search_by_ids)}>{"Buscar por IDs"}</button>
                <button class="button" onclick={gestionar_paises}>{"Gestionar Países"}</button>
            </div>

            { render_resultado(&handle.resultado) }
        </div>
    }
}
