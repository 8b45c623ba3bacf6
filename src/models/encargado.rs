use serde::{Deserialize, Serialize};
use super::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encargado {
    pub identificacion: EntityId,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(rename = "nombreCompleto", default)]
    pub nombre_completo: Option<String>,
}

impl Encargado {
    pub fn display_name(&self) -> String {
        self.nombre_completo
            .clone()
            .or_else(|| self.nombre.clone())
            .unwrap_or_else(|| self.identificacion.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_full_name() {
        let encargado: Encargado = serde_json::from_str(
            r#"{"identificacion": 1020, "nombre": "Ana", "nombreCompleto": "Ana Pérez"}"#,
        ).unwrap();
        assert_eq!(encargado.display_name(), "Ana Pérez");
    }

    #[test]
    fn falls_back_to_identification() {
        let encargado: Encargado = serde_json::from_str(r#"{"identificacion": "CC-9"}"#).unwrap();
        assert_eq!(encargado.display_name(), "CC-9");
    }
}
