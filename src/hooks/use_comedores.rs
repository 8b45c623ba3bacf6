use yew::prelude::*;

use crate::context::use_alert;
use crate::error::ApiError;
use crate::models::{AlertDialog, Comedor};
use crate::services::comedores::{
    create_comedor, find_comedores_by_ids, find_comedores_by_name, list_comedores,
};

/// Último resultado mostrado en la tabla
#[derive(Debug, Clone, PartialEq)]
pub enum ComedorResult {
    Rows(Vec<Comedor>),
    Error(String),
}

#[derive(Clone)]
pub struct UseComedoresHandle {
    pub nombre: UseStateHandle<String>,
    pub pais: UseStateHandle<String>,
    pub ids: UseStateHandle<String>,
    pub resultado: UseStateHandle<Option<ComedorResult>>,
    pub set_nombre: Callback<String>,
    pub set_pais: Callback<String>,
    pub set_ids: Callback<String>,
    pub create: Callback<()>,
    pub list_all: Callback<()>,
    pub search_by_name: Callback<()>,
    pub search_by_ids: Callback<()>,
}

/// "a1, b2 ,,c3" → ["a1", "b2", "c3"]
pub fn parse_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

fn show_result(resultado: &UseStateHandle<Option<ComedorResult>>, result: Result<Vec<Comedor>, ApiError>) {
    let value = match result {
        Ok(rows) => ComedorResult::Rows(rows),
        Err(e) => {
            log::error!("❌ Error en comedores: {}", e);
            ComedorResult::Error(e.to_string())
        }
    };
    resultado.set(Some(value));
}

#[hook]
pub fn use_comedores() -> UseComedoresHandle {
    let nombre = use_state(String::new);
    let pais = use_state(String::new);
    let ids = use_state(String::new);
    let resultado = use_state(|| None::<ComedorResult>);
    let alert = use_alert();

    let setter = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |value: String| handle.set(value))
    };
    let set_nombre = setter(&nombre);
    let set_pais = setter(&pais);
    let set_ids = setter(&ids);

    let create = {
        let (nombre, pais, resultado) = (nombre.clone(), pais.clone(), resultado.clone());
        Callback::from(move |_| {
            if nombre.trim().is_empty() || pais.trim().is_empty() {
                alert.show(AlertDialog::warning(
                    "Complete los campos",
                    "Por favor, completa todos los campos requeridos.",
                ));
                return;
            }
            let (nombre, pais, resultado) = ((*nombre).clone(), (*pais).clone(), resultado.clone());
            wasm_bindgen_futures::spawn_local(async move {
                show_result(&resultado, create_comedor(&nombre, &pais).await);
            });
        })
    };

    let list_all = {
        let resultado = resultado.clone();
        Callback::from(move |_| {
            let resultado = resultado.clone();
            wasm_bindgen_futures::spawn_local(async move {
                show_result(&resultado, list_comedores().await);
            });
        })
    };

    let search_by_name = {
        let (nombre, resultado) = (nombre.clone(), resultado.clone());
        Callback::from(move |_| {
            let (nombre, resultado) = ((*nombre).clone(), resultado.clone());
            wasm_bindgen_futures::spawn_local(async move {
                show_result(&resultado, find_comedores_by_name(&nombre).await);
            });
        })
    };

    let search_by_ids = {
        let (ids, resultado) = (ids.clone(), resultado.clone());
        Callback::from(move |_| {
            let ids = parse_ids(&ids);
            if ids.is_empty() {
                resultado.set(Some(ComedorResult::Rows(Vec::new())));
                return;
            }
            let resultado = resultado.clone();
            wasm_bindgen_futures::spawn_local(async move {
                show_result(&resultado, find_comedores_by_ids(&ids).await);
            });
        })
    };

    UseComedoresHandle {
        nombre,
        pais,
        ids,
        resultado,
        set_nombre,
        set_pais,
        set_ids,
        create,
        list_all,
        search_by_name,
        search_by_ids,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_ids() {
        assert_eq!(parse_ids("a1, b2 ,,c3"), vec!["a1", "b2", "c3"]);
        assert!(parse_ids("  ,  ").is_empty());
    }
}
