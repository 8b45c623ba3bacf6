use std::rc::Rc;

use serde_json::Value;
use yew::prelude::*;

use crate::utils::constants::STORAGE_KEY_SELECCION;
use crate::utils::storage::{load_from_storage, BrowserStore};

/// Contexto ligero del usuario: formularios seleccionados, agrupados
/// por comedor (`[{comedor, formularios}]`) o como lista plana
#[derive(Clone, Debug, PartialEq, Default)]
pub struct UserContext {
    pub formularios_seleccionados: Rc<Vec<Value>>,
}

impl UserContext {
    /// Restaura la selección guardada por la app de captura
    pub fn load() -> Self {
        let seleccion: Vec<Value> = load_from_storage(&BrowserStore, STORAGE_KEY_SELECCION).unwrap_or_default();
        log::info!("👤 Contexto de usuario: {} selecciones", seleccion.len());
        Self { formularios_seleccionados: Rc::new(seleccion) }
    }
}

#[derive(Properties, PartialEq)]
pub struct UserProviderProps {
    pub children: Children,
}

#[function_component(UserProvider)]
pub fn user_provider(props: &UserProviderProps) -> Html {
    let context = use_memo((), |_| UserContext::load());

    html! {
        <ContextProvider<UserContext> context={(*context).clone()}>
            { props.children.clone() }
        </ContextProvider<UserContext>>
    }
}

#[hook]
pub fn use_user() -> UserContext {
    use_context::<UserContext>().unwrap_or_default()
}
