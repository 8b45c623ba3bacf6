use yew::prelude::*;

use crate::context::use_alert;
use crate::error::ApiError;
use crate::models::{AlertDialog, Pais};
use crate::services::paises::{delete_pais, fetch_paises, post_pais, update_pais};

const NOMBRE_REQUERIDO: &str = "Ingrese un nombre de país";

/// Fila en edición: id crudo + nombre editado
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaisEdit {
    pub id: String,
    pub nombre: String,
}

#[derive(Clone)]
pub struct UseCrudPaisesHandle {
    pub paises: UseStateHandle<Vec<Pais>>,
    pub cargando: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub nuevo_nombre: UseStateHandle<String>,
    pub editing: UseStateHandle<Option<PaisEdit>>,
    pub set_nuevo_nombre: Callback<String>,
    pub create: Callback<()>,
    pub start_edit: Callback<Pais>,
    pub set_edit_nombre: Callback<String>,
    pub cancel_edit: Callback<()>,
    pub save_edit: Callback<()>,
    pub confirm_delete: Callback<String>,
}

/// Recarga la lista; los errores quedan en línea
fn reload(
    paises: UseStateHandle<Vec<Pais>>,
    cargando: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
) {
    cargando.set(true);
    error.set(None);
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_paises().await;
        error.set(list_error(&result));
        match result {
            Ok(list) => paises.set(list),
            Err(e) => log::error!("❌ cargarPaises: {}", e),
        }
        cargando.set(false);
    });
}

/// Mensaje en línea tras recargar; `None` si la carga salió bien
fn list_error(result: &Result<Vec<Pais>, ApiError>) -> Option<String> {
    result.as_ref().err().map(ToString::to_string)
}

#[hook]
pub fn use_crud_paises() -> UseCrudPaisesHandle {
    let paises = use_state(Vec::<Pais>::new);
    let cargando = use_state(|| false);
    let error = use_state(|| None::<String>);
    let nuevo_nombre = use_state(String::new);
    let editing = use_state(|| None::<PaisEdit>);
    let alert = use_alert();

    {
        let (paises, cargando, error) = (paises.clone(), cargando.clone(), error.clone());
        use_effect_with((), move |_| {
            reload(paises, cargando, error);
            || ()
        });
    }

    let set_nuevo_nombre = {
        let nuevo_nombre = nuevo_nombre.clone();
        Callback::from(move |value: String| nuevo_nombre.set(value))
    };

    let create = {
        let (paises, cargando, error) = (paises.clone(), cargando.clone(), error.clone());
        let nuevo_nombre = nuevo_nombre.clone();
        Callback::from(move |_| {
            let nombre = (*nuevo_nombre).clone();
            if nombre.trim().is_empty() {
                error.set(Some(NOMBRE_REQUERIDO.to_string()));
                return;
            }
            let (paises, cargando, error) = (paises.clone(), cargando.clone(), error.clone());
            let nuevo_nombre = nuevo_nombre.clone();
            cargando.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match post_pais(&nombre).await {
                    Ok(_) => {
                        nuevo_nombre.set(String::new());
                        reload(paises, cargando, error);
                    }
                    Err(e) => {
                        log::error!("❌ crearPais: {}", e);
                        error.set(Some(e.to_string()));
                        cargando.set(false);
                    }
                }
            });
        })
    };

    let start_edit = {
        let editing = editing.clone();
        Callback::from(move |pais: Pais| {
            editing.set(Some(PaisEdit { id: pais.id.to_string(), nombre: pais.nombre }));
        })
    };

    let set_edit_nombre = {
        let editing = editing.clone();
        Callback::from(move |nombre: String| {
            if let Some(current) = (*editing).clone() {
                editing.set(Some(PaisEdit { nombre, ..current }));
            }
        })
    };

    let cancel_edit = {
        let editing = editing.clone();
        let error = error.clone();
        Callback::from(move |_| {
            editing.set(None);
            error.set(None);
        })
    };

    let save_edit = {
        let (paises, cargando, error) = (paises.clone(), cargando.clone(), error.clone());
        let editing = editing.clone();
        Callback::from(move |_| {
            let Some(edit) = (*editing).clone() else {
                return;
            };
            if edit.nombre.trim().is_empty() {
                error.set(Some(NOMBRE_REQUERIDO.to_string()));
                return;
            }
            let (paises, cargando, error) = (paises.clone(), cargando.clone(), error.clone());
            let editing = editing.clone();
            cargando.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match update_pais(&edit.id, &edit.nombre).await {
                    Ok(()) => {
                        editing.set(None);
                        reload(paises, cargando, error);
                    }
                    Err(e) => {
                        log::error!("❌ guardarEdicion: {}", e);
                        error.set(Some(e.to_string()));
                        cargando.set(false);
                    }
                }
            });
        })
    };

    let confirm_delete = {
        let (paises, cargando, error) = (paises.clone(), cargando.clone(), error.clone());
        Callback::from(move |id: String| {
            let (paises, cargando, error) = (paises.clone(), cargando.clone(), error.clone());
            let on_confirm = Callback::from(move |_| {
                let id = id.clone();
                let (paises, cargando, error) = (paises.clone(), cargando.clone(), error.clone());
                wasm_bindgen_futures::spawn_local(async move {
                    match delete_pais(&id).await {
                        Ok(()) => reload(paises, cargando, error),
                        Err(e) => {
                            log::error!("❌ eliminarPais: {}", e);
                            error.set(Some(e.to_string()));
                        }
                    }
                });
            });
            alert.confirm(
                AlertDialog::warning("¿Eliminar este país?", "Esta acción no se puede deshacer.")
                    .confirm("Sí, eliminar", "Cancelar"),
                on_confirm,
                Callback::noop(),
            );
        })
    };

    UseCrudPaisesHandle {
        paises,
        cargando,
        error,
        nuevo_nombre,
        editing,
        set_nuevo_nombre,
        create,
        start_edit,
        set_edit_nombre,
        cancel_edit,
        save_edit,
        confirm_delete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_reload_clears_the_inline_error() {
        assert_eq!(list_error(&Ok(Vec::new())), None);
        let fallo = list_error(&Err(ApiError::Network("sin conexión".into())));
        assert!(fallo.is_some());
    }
}
