use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::{use_pais_selector, SelectorPhase};

#[derive(Properties, PartialEq)]
pub struct PaisSelectorProps {
    /// Recibe el nombre del país elegido
    pub on_change: Callback<String>,
}

#[function_component(PaisSelector)]
pub fn pais_selector(props: &PaisSelectorProps) -> Html {
    let selector = use_pais_selector(props.on_change.clone());
    let busy = selector.phase.is_busy();

    let onchange = {
        let select = selector.select.clone();
        Callback::from(move |e: Event| {
            select.emit(e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };
    let oninput = {
        let set = selector.set_nuevo_nombre.clone();
        Callback::from(move |e: InputEvent| set.emit(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let onclick = {
        let create = selector.create.clone();
        Callback::from(move |_| create.emit(()))
    };

    html! {
        <div class="form-group">
            <label class="label">{"País:"}</label>
            <select class="input" onchange={onchange} disabled={busy}>
                <option value="" selected={selector.selected_id.is_empty()}>{"Selecciona un país"}</option>
                { for selector.paises.iter().map(|p| {
                    let id = p.id.to_string();
                    let selected = *selector.selected_id == id;
                    html! { <option key={id.clone()} value={id} selected={selected}>{ &p.nombre }</option> }
                }) }
            </select>
            <div class="inline-create">
                <input
                    class="input"
                    placeholder="Nuevo país"
                    value={(*selector.nuevo_nombre).clone()}
                    oninput={oninput}
                />
                <button class="button" onclick={onclick} disabled={busy}>
                    { if *selector.phase == SelectorPhase::Creating { "Agregando..." } else { "Agregar país" } }
                </button>
            </div>
        </div>
    }
}
