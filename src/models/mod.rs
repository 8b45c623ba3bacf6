pub mod entity_id;
pub mod pais;
pub mod comedor;
pub mod encargado;
pub mod formulario;
pub mod dashboard;
pub mod migration;
pub mod dialog;

pub use entity_id::EntityId;
pub use pais::{Pais, PaisRequest};
pub use comedor::{Comedor, NuevoComedor};
pub use encargado::Encargado;
pub use formulario::{Formulario, FormularioResumen, HistoryEntry, Realizacion, Encuestado};
pub use dashboard::{
    DashboardMetrics, DashboardQuery, FilterKind, LabeledTotal, PreguntaRanking, RespuestaConteo,
    GeneralMetrics, ComedorMetrics, EncargadoMetrics, EncuestaMetrics,
};
pub use migration::{GeneratedFile, MigrationResponse};
pub use dialog::{AlertDialog, DialogKind};
