//! Modèle de données du formulaire

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::utils::field_rules::RuleViolation;

/// Un des cinq champs du formulaire
#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display,
)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    #[display("Name")]
    Name,
    #[display("Email")]
    Email,
    #[display("Password")]
    Password,
    #[display("Mobile Number")]
    Mobile,
    #[display("Upload File")]
    File,
}

/// Nature de la valeur attendue par un champ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FieldKind {
    #[display("text")]
    Text,
    #[display("file")]
    File,
}

impl FieldName {
    /// Position du champ dans l'enregistrement de session
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldName::File => FieldKind::File,
            _ => FieldKind::Text,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldName::Name => "Enter your name",
            FieldName::Email => "Enter your email",
            FieldName::Password => "Enter a secure password",
            FieldName::Mobile => "Enter 10 digit mobile number",
            FieldName::File => "Path of the file to upload",
        }
    }
}

/// Un fichier choisi par l'utilisateur.
///
/// Seules les métadonnées sont conservées: le contenu n'est jamais lu.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Display)]
#[display("{name} ({mime_type}, {size_bytes} bytes)")]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }
}

/// La valeur courante d'un champ
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Text(String),
    File(Option<SelectedFile>),
}

impl FieldValue {
    /// La valeur vide d'un champ, telle qu'au début de la session
    pub fn empty(field: FieldName) -> Self {
        match field.kind() {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::File => FieldValue::File(None),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::File(_) => FieldKind::File,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::File(file) => file.is_none(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<SelectedFile> for FieldValue {
    fn from(file: SelectedFile) -> Self {
        FieldValue::File(Some(file))
    }
}

/// L'état d'un champ pendant la session.
///
/// `touched` passe à vrai à la première modification et n'est remis à faux
/// que par la réinitialisation du formulaire. `error` est recalculé à chaque
/// évaluation du champ.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: FieldValue,
    pub touched: bool,
    pub error: Option<RuleViolation>,
}

impl FieldState {
    pub fn new(field: FieldName) -> Self {
        Self {
            value: FieldValue::empty(field),
            touched: false,
            error: None,
        }
    }

    /// Vrai si le champ compte dans la progression
    pub fn counts_as_valid(&self) -> bool {
        self.touched && self.error.is_none()
    }

    /// Le message à afficher sous le champ, s'il y en a un
    pub fn visible_error(&self) -> Option<&RuleViolation> {
        if self.touched {
            self.error.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_field_indices_are_distinct() {
        let indices: Vec<usize> = FieldName::iter().map(FieldName::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_values_match_field_kind() {
        for field in FieldName::iter() {
            let value = FieldValue::empty(field);
            assert_eq!(value.kind(), field.kind(), "Wrong empty value for {}", field);
            assert!(value.is_empty());
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(FieldName::Mobile.to_string(), "Mobile Number");
        assert_eq!(FieldName::File.to_string(), "Upload File");
        assert_eq!(
            SelectedFile::new("cat.png", "image/png", 1000).to_string(),
            "cat.png (image/png, 1000 bytes)"
        );
    }

    #[test]
    fn test_untouched_state_never_counts() {
        let state = FieldState::new(FieldName::Name);
        assert!(!state.counts_as_valid());
        assert!(state.visible_error().is_none());
    }
}
