use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use super::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pais {
    pub id: EntityId,
    pub nombre: String,
}

/// Cuerpo de POST /pais y PUT /pais/{id}
#[derive(Debug, Clone, Serialize)]
pub struct PaisRequest {
    pub nombre: String,
}

/// Ordena por nombre con comparación de idioma (orden estable)
pub fn sort_paises(paises: &mut [Pais]) {
    paises.sort_by(|a, b| locale_compare(&a.nombre, &b.nombre));
}

/// `localeCompare` del navegador
#[cfg(target_arch = "wasm32")]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let result = js_sys::JsString::from(a).locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new());
    result.cmp(&0)
}

/// Colación por niveles como la raíz de ICU: letra base, luego acento,
/// luego mayúsculas (minúscula primero)
#[cfg(not(target_arch = "wasm32"))]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let (ka, kb) = (collation_key(a), collation_key(b));
    let primary = |k: &[(char, u8, u8)]| k.iter().map(|c| c.0).collect::<Vec<_>>();
    let secondary = |k: &[(char, u8, u8)]| k.iter().map(|c| c.1).collect::<Vec<_>>();
    let tertiary = |k: &[(char, u8, u8)]| k.iter().map(|c| c.2).collect::<Vec<_>>();

    primary(&ka)
        .cmp(&primary(&kb))
        .then_with(|| secondary(&ka).cmp(&secondary(&kb)))
        .then_with(|| tertiary(&ka).cmp(&tertiary(&kb)))
}

/// (letra base, marca de acento, 1 si es mayúscula)
#[cfg(not(target_arch = "wasm32"))]
fn collation_key(s: &str) -> Vec<(char, u8, u8)> {
    s.chars()
        .map(|c| {
            let upper = u8::from(c.is_uppercase());
            let lower = c.to_lowercase().next().unwrap_or(c);
            let (base, accent) = fold_accent(lower);
            (base, accent, upper)
        })
        .collect()
}

#[cfg(not(target_arch = "wasm32"))]
fn fold_accent(c: char) -> (char, u8) {
    match c {
        'á' => ('a', 1), 'à' => ('a', 2), 'â' => ('a', 3), 'ä' => ('a', 4), 'ã' => ('a', 5),
        'é' => ('e', 1), 'è' => ('e', 2), 'ê' => ('e', 3), 'ë' => ('e', 4),
        'í' => ('i', 1), 'ì' => ('i', 2), 'î' => ('i', 3), 'ï' => ('i', 4),
        'ó' => ('o', 1), 'ò' => ('o', 2), 'ô' => ('o', 3), 'ö' => ('o', 4), 'õ' => ('o', 5),
        'ú' => ('u', 1), 'ù' => ('u', 2), 'û' => ('u', 3), 'ü' => ('u', 4),
        'ñ' => ('n', 5),
        'ç' => ('c', 6),
        other => (other, 0),
    }
}

pub fn find_pais<'a>(paises: &'a [Pais], raw_id: &str) -> Option<&'a Pais> {
    paises.iter().find(|p| p.id.matches(raw_id))
}
