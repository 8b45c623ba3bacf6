pub mod use_pais_selector;
pub mod use_crud_paises;
pub mod use_comedores;
pub mod use_dashboard;
pub mod use_history;
pub mod use_home_forms;

pub use use_pais_selector::{use_pais_selector, SelectorPhase, UsePaisSelectorHandle};
pub use use_crud_paises::{use_crud_paises, PaisEdit, UseCrudPaisesHandle};
pub use use_comedores::{use_comedores, ComedorResult, UseComedoresHandle};
pub use use_dashboard::{use_dashboard, PreguntaDetalle, UseDashboardHandle};
pub use use_history::{use_history, UseHistoryHandle};
pub use use_home_forms::{use_home_forms, UseHomeFormsHandle};
