use yew::prelude::*;

use crate::hooks::use_history;
use crate::models::HistoryEntry;

fn render_entry(entry: &HistoryEntry) -> Html {
    let key = format!("{}-{}-{}", entry.form_index, entry.realizacion_index, entry.encuestado_index);
    html! {
        <li key={key} class="history-item">
            <h3 class="history-form-name">{ &entry.form_name }</h3>
            <p><strong>{"Fecha: "}</strong>{ &entry.fecha }</p>
            <p><strong>{"Colaborador: "}</strong>{ &entry.colaborador }</p>
            <p><strong>{"Comedor: "}</strong>{ &entry.comedor }</p>
        </li>
    }
}

/// Historial local de encuestas llenadas y subida al backend de migración
#[function_component(Historial)]
pub fn historial() -> Html {
    let handle = use_history();
    let uploading = *handle.uploading;

    let (total, entries) = match handle.history.as_ref() {
        Some(history) => (history.total_encuestados(), history.entries()),
        None => (0, Vec::new()),
    };

    let on_upload = {
        let upload = handle.upload.clone();
        Callback::from(move |_| upload.emit(()))
    };

    html! {
        <div class="history">
            <h1 class="title">{"Formularios"}</h1>
            <p class="history-total">{ format!("Total de realizaciones: {}", total) }</p>

            if entries.is_empty() {
                <p class="no-data">{"No hay formularios llenados aún."}</p>
            } else {
                <ul class="history-list">
                    { for entries.iter().map(render_entry) }
                </ul>
            }

            <button class="btn-primary" onclick={on_upload} disabled={uploading}>
                { if uploading { "Subiendo..." } else { "Subir Formularios" } }
            </button>
        </div>
    }
}
