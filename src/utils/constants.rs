/// Clave de localStorage con el historial de respuestas llenadas
pub const STORAGE_KEY_RESPUESTAS: &str = "respuestas";

/// Clave de localStorage con las definiciones de formularios disponibles
pub const STORAGE_KEY_FORMS: &str = "forms";

/// Versión actual del envoltorio del historial (0 = arreglo plano heredado)
pub const HISTORY_SCHEMA_VERSION: u32 = 1;

/// Texto común para colecciones vacías en el dashboard
pub const NO_DATA_TEXT: &str = "No hay datos disponibles";

/// Colores de las porciones del pastel y de la leyenda
pub const CHART_COLORS: [&str; 5] = ["#10b981", "#3b82f6", "#6366f1", "#8b5cf6", "#ec4899"];

/// Clave de localStorage con la selección de formularios del usuario
pub const STORAGE_KEY_SELECCION: &str = "formulariosSeleccionados";
