// ============================================================================
// USE PAIS SELECTOR - Lista de países + creación con auto-selección
// ============================================================================

use yew::prelude::*;

use crate::context::use_alert;
use crate::error::ApiError;
use crate::models::pais::{find_pais, Pais};
use crate::models::AlertDialog;
use crate::services::paises::{create_pais, fetch_paises};

/// Fase del selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Creating,
}

impl SelectorPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, SelectorPhase::Loading | SelectorPhase::Creating)
    }
}

#[derive(Clone)]
pub struct UsePaisSelectorHandle {
    pub phase: UseStateHandle<SelectorPhase>,
    pub paises: UseStateHandle<Vec<Pais>>,
    pub selected_id: UseStateHandle<String>,
    pub nuevo_nombre: UseStateHandle<String>,
    pub select: Callback<String>,
    pub set_nuevo_nombre: Callback<String>,
    pub create: Callback<()>,
}

/// `on_change` recibe el nombre del país elegido (vacío = ninguno)
#[hook]
pub fn use_pais_selector(on_change: Callback<String>) -> UsePaisSelectorHandle {
    let phase = use_state(SelectorPhase::default);
    let paises = use_state(Vec::<Pais>::new);
    let selected_id = use_state(String::new);
    let nuevo_nombre = use_state(String::new);
    let alert = use_alert();

    // Carga inicial
    {
        let phase = phase.clone();
        let paises = paises.clone();
        use_effect_with((), move |_| {
            phase.set(SelectorPhase::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_paises().await {
                    Ok(list) => paises.set(list),
                    Err(e) => log::error!("❌ Error al cargar países: {}", e),
                }
                phase.set(SelectorPhase::Ready);
            });
            || ()
        });
    }

    let select = {
        let paises = paises.clone();
        let selected_id = selected_id.clone();
        let on_change = on_change.clone();
        Callback::from(move |raw_id: String| {
            let nombre = find_pais(&paises, &raw_id)
                .map(|p| p.nombre.clone())
                .unwrap_or_default();
            selected_id.set(raw_id);
            on_change.emit(nombre);
        })
    };

    let set_nuevo_nombre = {
        let nuevo_nombre = nuevo_nombre.clone();
        Callback::from(move |value: String| nuevo_nombre.set(value))
    };

    let create = {
        let phase = phase.clone();
        let paises = paises.clone();
        let selected_id = selected_id.clone();
        let nuevo_nombre = nuevo_nombre.clone();
        Callback::from(move |_| {
            let nombre = (*nuevo_nombre).clone();
            if nombre.trim().is_empty() {
                alert.show(AlertDialog::warning("País requerido", "Ingrese un nombre de país"));
                return;
            }

            let phase = phase.clone();
            let paises = paises.clone();
            let selected_id = selected_id.clone();
            let nuevo_nombre = nuevo_nombre.clone();
            let on_change = on_change.clone();
            let alert = alert.clone();
            phase.set(SelectorPhase::Creating);

            wasm_bindgen_futures::spawn_local(async move {
                match create_pais(&nombre).await {
                    Ok(creado) => {
                        nuevo_nombre.set(String::new());
                        let list = fetch_paises().await.unwrap_or_else(|e| {
                            log::error!("❌ Error recargando países: {}", e);
                            (*paises).clone()
                        });
                        if let Some((id, nombre)) = selection_after_create(creado.as_ref(), &list) {
                            log::info!("✅ País creado y seleccionado: {} ({})", nombre, id);
                            selected_id.set(id);
                            on_change.emit(nombre);
                        }
                        paises.set(list);
                    }
                    Err(e) => {
                        log::error!("❌ Error al agregar país: {}", e);
                        alert.show(AlertDialog::error("Error", &create_error_text(&e)));
                    }
                }
                phase.set(SelectorPhase::Ready);
            });
        })
    };

    UsePaisSelectorHandle {
        phase,
        paises,
        selected_id,
        nuevo_nombre,
        select,
        set_nuevo_nombre,
        create,
    }
}

/// Selección tras crear: id y nombre del país creado, con el nombre
/// que trae la lista recargada si ya aparece en ella
pub fn selection_after_create(creado: Option<&Pais>, paises: &[Pais]) -> Option<(String, String)> {
    let creado = creado?;
    let id = creado.id.to_string();
    let nombre = find_pais(paises, &id)
        .map(|p| p.nombre.clone())
        .unwrap_or_else(|| creado.nombre.clone());
    Some((id, nombre))
}

fn create_error_text(error: &ApiError) -> String {
    match error {
        ApiError::Parse(_) => "Error del servidor: respuesta inválida (no JSON)".to_string(),
        other => format!("Error: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityId;
    use crate::models::pais::sort_paises;

    #[test]
    fn busy_phases_disable_actions() {
        assert!(SelectorPhase::Loading.is_busy());
        assert!(SelectorPhase::Creating.is_busy());
        assert!(!SelectorPhase::Ready.is_busy());
        assert_eq!(SelectorPhase::default(), SelectorPhase::Idle);
    }

    #[test]
    fn create_errors_are_readable() {
        assert_eq!(
            create_error_text(&ApiError::Parse("x".into())),
            "Error del servidor: respuesta inválida (no JSON)"
        );
        let http = ApiError::Http { status: 409, message: "El país ya existe".into() };
        assert_eq!(create_error_text(&http), "Error: El país ya existe");
    }

    #[test]
    fn created_country_is_selected_from_reloaded_list() {
        let creado = Pais { id: EntityId::Int(7), nombre: "Colombia".into() };
        let mut recargados = vec![
            Pais { id: EntityId::Int(3), nombre: "Perú".into() },
            Pais { id: EntityId::Int(7), nombre: "Colombia".into() },
        ];
        sort_paises(&mut recargados);

        assert!(recargados.iter().any(|p| p.id == EntityId::Int(7)));
        assert_eq!(
            selection_after_create(Some(&creado), &recargados),
            Some(("7".to_string(), "Colombia".to_string()))
        );
    }

    #[test]
    fn no_created_entry_keeps_current_selection() {
        assert_eq!(selection_after_create(None, &[]), None);
        let creado = Pais { id: EntityId::Int(9), nombre: "Chile".into() };
        assert_eq!(selection_after_create(Some(&creado), &[]), Some(("9".into(), "Chile".into())));
    }
}
