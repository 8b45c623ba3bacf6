use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_crud_paises;

#[function_component(CrudPaises)]
pub fn crud_paises() -> Html {
    let handle = use_crud_paises();
    let cargando = *handle.cargando;

    let on_nuevo = {
        let set = handle.set_nuevo_nombre.clone();
        Callback::from(move |e: InputEvent| set.emit(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_crear = {
        let create = handle.create.clone();
        Callback::from(move |_| create.emit(()))
    };

    let filas = handle.paises.iter().map(|pais| {
        let id = pais.id.to_string();
        let editando = handle.editing.as_ref().filter(|edit| edit.id == id);

        let nombre_cell = match editando {
            Some(edit) => {
                let set = handle.set_edit_nombre.clone();
                html! {
                    <input
                        class="input"
                        value={edit.nombre.clone()}
                        oninput={Callback::from(move |e: InputEvent| set.emit(e.target_unchecked_into::<HtmlInputElement>().value()))}
                    />
                }
            }
            None => html! { { &pais.nombre } },
        };

        let acciones = if editando.is_some() {
            let save = handle.save_edit.clone();
            let cancel = handle.cancel_edit.clone();
            html! {
                <>
                    <button class="button" onclick={Callback::from(move |_| save.emit(()))} disabled={cargando}>{"Guardar"}</button>
                    <button class="secondary" onclick={Callback::from(move |_| cancel.emit(()))}>{"Cancelar"}</button>
                </>
            }
        } else {
            let start = handle.start_edit.clone();
            let delete = handle.confirm_delete.clone();
            let pais = pais.clone();
            let delete_id = id.clone();
            html! {
                <>
                    <button class="button" onclick={Callback::from(move |_| start.emit(pais.clone()))}>{"Editar"}</button>
                    <button class="danger" onclick={Callback::from(move |_| delete.emit(delete_id.clone()))}>{"Eliminar"}</button>
                </>
            }
        };

        html! {
            <tr key={id.clone()}>
                <td class="value-cell">{ id }</td>
                <td class="value-cell">{ nombre_cell }</td>
                <td class="value-cell"><div class="actions">{ acciones }</div></td>
            </tr>
        }
    });

    html! {
        <div class="container">
            <h3 class="title">{"Gestionar Países"}</h3>

            if let Some(error) = (*handle.error).clone() {
                <div class="error">{ error }</div>
            }
            if cargando {
                <div class="loading">{"Cargando..."}</div>
            }

            <div class="form-group">
                <input
                    class="input"
                    placeholder="Nuevo país (Ej: Colombia)"
                    value={(*handle.nuevo_nombre).clone()}
                    oninput={on_nuevo}
                />
                <div class="button-group">
                    <button class="button" onclick={on_crear} disabled={cargando}>{"Agregar"}</button>
                </div>
            </div>

            <div class="result-container">
                <table class="result-table">
                    <thead>
                        <tr>
                            <th class="key-cell">{"ID"}</th>
                            <th class="key-cell">{"Nombre"}</th>
                            <th class="key-cell">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for filas }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
