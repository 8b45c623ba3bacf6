use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador del backend: entero (países) o texto (ObjectId de Mongo)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Text(String),
}

impl EntityId {
    /// Compara por forma textual, como lo hace un `<select>`
    pub fn matches(&self, raw: &str) -> bool {
        self.to_string() == raw
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(id) => write!(f, "{}", id),
            EntityId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        EntityId::Int(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId::Text(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numbers_and_strings() {
        let ids: Vec<EntityId> = serde_json::from_str(r#"[7, "65f0a1"]"#).unwrap();
        assert_eq!(ids, vec![EntityId::Int(7), EntityId::Text("65f0a1".into())]);
    }

    #[test]
    fn matches_select_values() {
        assert!(EntityId::Int(7).matches("7"));
        assert!(!EntityId::Int(7).matches("70"));
        assert!(EntityId::from("abc").matches("abc"));
    }
}
