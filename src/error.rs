//! Errores de la consola.
//! Los servicios devuelven estos tipos y cada vista decide su fallback
//! (lista vacía, datos de ejemplo o diálogo), nunca se relanzan.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Error de red: {0}")]
    Network(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Respuesta inválida del servidor: {0}")]
    Parse(String),

    #[error("Error serializando la petición: {0}")]
    Serialization(String),

    #[error("Tiempo de espera agotado ({0} ms)")]
    Timeout(u32),

    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Código HTTP si el servidor respondió
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("No se pudo acceder a localStorage")]
    Unavailable,

    #[error("Error serializando datos: {0}")]
    Serialize(String),

    #[error("Error escribiendo la clave {0} en localStorage")]
    Write(String),
}

/// Resultado de leer el historial local de respuestas
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistoryError {
    #[error("No hay respuestas guardadas en localStorage.")]
    Missing,

    #[error("No hay respuestas que mostrar en localStorage.")]
    Empty,

    #[error("No se pudo cargar la colección de respuestas: {0}")]
    Malformed(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl HistoryError {
    /// Missing y Empty son "nada que mostrar", no fallos
    pub fn is_no_data(&self) -> bool {
        matches!(self, HistoryError::Missing | HistoryError::Empty)
    }
}
