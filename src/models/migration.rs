use serde::{Deserialize, Serialize};

/// Respuesta de POST /migrate_and_export_individual
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MigrationResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub files: Vec<GeneratedFile>,
}

/// Archivo generado por la migración: `{nombre, file, url}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedFile {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
    pub url: String,
}

impl GeneratedFile {
    /// URL absoluta respecto al origen del backend principal
    pub fn absolute_url(&self, origin: &str) -> String {
        if self.url.starts_with("http") {
            self.url.clone()
        } else {
            format!("{}{}", origin, self.url)
        }
    }

    /// Nombre por defecto que propone el servidor
    pub fn default_filename(&self) -> String {
        match self.file.as_deref().filter(|f| !f.is_empty()) {
            Some(file) => file.to_string(),
            None => format!("{}.xlsx", self.nombre.as_deref().filter(|n| !n.is_empty()).unwrap_or("survey")),
        }
    }

    /// Nombre para mensajes de error
    pub fn display_name(&self) -> String {
        self.file
            .clone()
            .or_else(|| self.nombre.clone())
            .unwrap_or_else(|| self.url.clone())
    }
}

/// Extrae `filename=` de un encabezado Content-Disposition
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let (_, rest) = header.split_once("filename=")?;
    let name = rest.split(';').next()?.replace('"', "");
    let name = name.trim();
    if name.is_empty() { None } else { Some(name.to_string()) }
}

/// Valor decodificado de un parámetro de la query string. En el navegador
/// lo resuelve `URLSearchParams`; las URLs que `URL` no acepta pasan al
/// parser local
pub fn query_param(url: &str, name: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Ok(parsed) = web_sys::Url::new(url) {
            return parsed.search_params().get(name).filter(|value| !value.is_empty());
        }
    }
    parse_query_param(url, name)
}

fn parse_query_param(url: &str, name: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode(value))
        .filter(|value| !value.is_empty())
}

fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                (Some(hi), Some(lo)) => {
                    out.push(hi * 16 + lo);
                    i += 2;
                }
                _ => out.push(b'%'),
            },
            other => out.push(other),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|d| d as u8)
}

/// Nombre final de la descarga: Content-Disposition, luego `?file=`,
/// luego el nombre por defecto del servidor
pub fn resolve_download_filename(disposition: Option<&str>, url: &str, file: &GeneratedFile) -> String {
    if let Some(name) = disposition.and_then(filename_from_disposition) {
        return name;
    }
    query_param(url, "file").unwrap_or_else(|| file.default_filename())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated(nombre: Option<&str>, file: Option<&str>, url: &str) -> GeneratedFile {
        GeneratedFile {
            nombre: nombre.map(str::to_string),
            file: file.map(str::to_string),
            url: url.to_string(),
        }
    }

    #[test]
    fn empty_files_list_parses() {
        let response: MigrationResponse =
            serde_json::from_str(r#"{"message": "Migración completada", "files": []}"#).unwrap();
        assert!(response.files.is_empty());
        let response: MigrationResponse = serde_json::from_str("{}").unwrap();
        assert!(response.files.is_empty());
    }

    #[test]
    fn relative_urls_get_backend_origin() {
        let f = generated(None, None, "/download?file=a.xlsx");
        assert_eq!(f.absolute_url("https://mog-sqj7.onrender.com"), "https://mog-sqj7.onrender.com/download?file=a.xlsx");
        let f = generated(None, None, "https://cdn.example.org/a.xlsx");
        assert_eq!(f.absolute_url("https://mog-sqj7.onrender.com"), "https://cdn.example.org/a.xlsx");
    }

    #[test]
    fn disposition_wins() {
        let f = generated(Some("Encuesta"), Some("server.xlsx"), "/d?file=query.xlsx");
        let name = resolve_download_filename(
            Some(r#"attachment; filename="reporte final.xlsx"; size=10"#),
            "https://h/d?file=query.xlsx",
            &f,
        );
        assert_eq!(name, "reporte final.xlsx");
    }

    #[test]
    fn query_param_is_second_choice() {
        let f = generated(Some("Encuesta"), Some("server.xlsx"), "");
        let name = resolve_download_filename(Some("inline"), "https://h/d?x=1&file=encuesta%20uno.xlsx", &f);
        assert_eq!(name, "encuesta uno.xlsx");
    }

    #[test]
    fn server_default_is_last() {
        let f = generated(Some("Nutrición"), None, "");
        assert_eq!(resolve_download_filename(None, "https://h/d", &f), "Nutrición.xlsx");
        let f = generated(None, None, "");
        assert_eq!(resolve_download_filename(None, "https://h/d?file=", &f), "survey.xlsx");
        let f = generated(None, Some("f.xlsx"), "");
        assert_eq!(resolve_download_filename(None, "https://h/d", &f), "f.xlsx");
    }

    #[test]
    fn percent_decode_keeps_invalid_sequences() {
        assert_eq!(percent_decode("a%2Fb"), "a/b");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }

    #[test]
    fn local_query_parser_handles_fragments_and_bare_keys() {
        assert_eq!(parse_query_param("https://h/d?file=a+b.xlsx#top", "file").as_deref(), Some("a b.xlsx"));
        assert_eq!(parse_query_param("/d?file&x=1", "file"), None);
        assert_eq!(parse_query_param("/d", "file"), None);
    }
}
