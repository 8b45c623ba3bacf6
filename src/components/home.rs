use yew::prelude::*;

use crate::hooks::use_home_forms;

#[function_component(Home)]
pub fn home() -> Html {
    let handle = use_home_forms();

    let body = if *handle.loading {
        html! { <p class="loading-text">{"Cargando..."}</p> }
    } else if let Some(error) = handle.error.as_ref() {
        html! { <p class="error">{ error }</p> }
    } else if handle.forms.is_empty() {
        html! { <p class="no-data">{"No tienes formularios seleccionados."}</p> }
    } else {
        html! {
            <ul class="form-list">
                { for handle.forms.iter().map(|form| html! {
                    <li key={form.key()} class="form-item">
                        { format!("{} – {}", form.title, form.comedor_nombre) }
                    </li>
                }) }
            </ul>
        }
    };

    html! {
        <div class="home">
            <h1 class="title">{"FORMULARIOS"}</h1>
            { body }
        </div>
    }
}
