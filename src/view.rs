//! Rendu texte de l'état du formulaire

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::consts::TOTAL_FIELDS;
use crate::models::FieldName;
use crate::session::FormSession;

/// Une erreur affichée sous un champ
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct InlineError {
    pub field: FieldName,
    pub message: String,
}

/// Instantané de ce qui est affiché après un événement.
///
/// Il est pris sur une session qui a fini son recalcul, donc jamais sur un
/// état intermédiaire.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ProgressView {
    pub revision: u64,
    pub valid_count: usize,
    pub total_fields: usize,
    pub progress_percent: f64,
    pub errors: Vec<InlineError>,
}

impl ProgressView {
    pub fn of(session: &FormSession) -> Self {
        let errors = FieldName::iter()
            .filter_map(|field| {
                session.field(field).visible_error().map(|violation| InlineError {
                    field,
                    message: violation.to_string(),
                })
            })
            .collect();

        Self {
            revision: session.revision(),
            valid_count: session.valid_count(),
            total_fields: TOTAL_FIELDS,
            progress_percent: session.progress_percent(),
            errors,
        }
    }

    /// "3 of 5 fields completed"
    pub fn readout(&self) -> String {
        format!("{} of {} fields completed", self.valid_count, self.total_fields)
    }

    /// Barre de progression de `width` cases, suivie du pourcentage
    pub fn bar(&self, width: usize) -> String {
        let filled = width * self.valid_count / self.total_fields;
        format!(
            "[{}{}] {:.0}%",
            "#".repeat(filled),
            "-".repeat(width - filled),
            self.progress_percent
        )
    }

    /// Message sous un champ, s'il doit être affiché
    pub fn error_for(&self, field: FieldName) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }
}
