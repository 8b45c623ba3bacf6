/// Icono del diálogo de alerta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Success,
    Error,
    Warning,
}

impl DialogKind {
    pub fn icon(&self) -> &'static str {
        match self {
            DialogKind::Success => "✅",
            DialogKind::Error => "❌",
            DialogKind::Warning => "⚠️",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            DialogKind::Success => "alert-dialog success",
            DialogKind::Error => "alert-dialog error",
            DialogKind::Warning => "alert-dialog warning",
        }
    }
}

/// Diálogo modal bloqueante (título, texto y botones)
#[derive(Debug, Clone, PartialEq)]
pub struct AlertDialog {
    pub title: String,
    pub text: String,
    pub kind: DialogKind,
    pub confirm_label: String,
    pub cancel_label: Option<String>,
}

impl AlertDialog {
    pub fn new(kind: DialogKind, title: &str, text: &str) -> Self {
        Self {
            title: title.to_string(),
            text: text.to_string(),
            kind,
            confirm_label: "Aceptar".to_string(),
            cancel_label: None,
        }
    }

    pub fn error(title: &str, text: &str) -> Self {
        Self::new(DialogKind::Error, title, text)
    }

    pub fn success(title: &str, text: &str) -> Self {
        Self::new(DialogKind::Success, title, text)
    }

    pub fn warning(title: &str, text: &str) -> Self {
        Self::new(DialogKind::Warning, title, text)
    }

    /// Diálogo de confirmación con dos botones
    pub fn confirm(mut self, confirm_label: &str, cancel_label: &str) -> Self {
        self.confirm_label = confirm_label.to_string();
        self.cancel_label = Some(cancel_label.to_string());
        self
    }
}
