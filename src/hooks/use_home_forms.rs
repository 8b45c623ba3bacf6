use yew::prelude::*;

use crate::context::use_user;
use crate::services::survey_store::load_stored_forms;
use crate::utils::storage::BrowserStore;
use crate::viewmodels::{FormListItem, HomeViewModel};

#[derive(Clone)]
pub struct UseHomeFormsHandle {
    pub forms: UseStateHandle<Vec<FormListItem>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
}

/// Formularios para llenar: `forms` de localStorage + selección del usuario
#[hook]
pub fn use_home_forms() -> UseHomeFormsHandle {
    let forms = use_state(Vec::<FormListItem>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let user = use_user();

    {
        let (forms, loading, error) = (forms.clone(), loading.clone(), error.clone());
        use_effect_with(user.formularios_seleccionados.clone(), move |seleccion| {
            match load_stored_forms(&BrowserStore) {
                Ok(stored) => forms.set(HomeViewModel::form_list(&stored, seleccion)),
                Err(e) => {
                    log::error!("❌ Error cargando formularios desde localStorage: {}", e);
                    error.set(Some("Error al cargar los formularios desde localStorage".to_string()));
                }
            }
            loading.set(false);
            || ()
        });
    }

    UseHomeFormsHandle { forms, loading, error }
}
