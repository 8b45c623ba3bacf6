pub mod app;
pub mod header;
pub mod alert_modal;
pub mod charts;
pub mod home;
pub mod pais_selector;
pub mod crud_comedores;
pub mod crud_paises;
pub mod dashboard;
pub mod history;

pub use app::App;
pub use header::{Header, View};
pub use alert_modal::AlertModal;
pub use charts::{BarChart, MetricCard, PieChart};
pub use home::Home;
pub use pais_selector::PaisSelector;
pub use crud_comedores::CrudComedores;
pub use crud_paises::CrudPaises;
pub use dashboard::Dashboard;
pub use history::Historial;
