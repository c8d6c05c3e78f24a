//! Session du formulaire, et point d'entrée unique pour modifier son état.
//!
use derive_more::Display;
use log::{debug, info};
use serde::Serialize;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::consts::{SUBMIT_ACKNOWLEDGMENT, TOTAL_FIELDS};
use crate::models::{FieldKind, FieldName, FieldState, FieldValue};
use crate::utils::field_rules::{evaluate, RuleViolation};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Le champ {field} attend une valeur de type {expected}, reçu {received}")]
    WrongKind {
        field: FieldName,
        expected: FieldKind,
        received: FieldKind,
    },
}

/// Soumission refusée: au moins un champ est invalide
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Soumission refusée: {} champ(s) invalide(s)", .violations.len())]
pub struct SubmitBlocked {
    pub violations: Vec<(FieldName, RuleViolation)>,
}

/// Accusé de réception d'une soumission acceptée
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{}", SUBMIT_ACKNOWLEDGMENT)]
pub struct Acknowledgment;

/// L'état complet d'un formulaire en cours de saisie.
///
/// L'état n'est modifié que par `on_field_change` et `on_submit`; chacune de
/// ces opérations termine son recalcul avant de rendre la main, et incrémente
/// `revision` exactement une fois.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormSession {
    fields: [FieldState; TOTAL_FIELDS],
    valid_count: usize,
    revision: u64,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            fields: [
                FieldState::new(FieldName::Name),
                FieldState::new(FieldName::Email),
                FieldState::new(FieldName::Password),
                FieldState::new(FieldName::Mobile),
                FieldState::new(FieldName::File),
            ],
            valid_count: 0,
            revision: 0,
        }
    }

    pub fn field(&self, field: FieldName) -> &FieldState {
        &self.fields[field.index()]
    }

    /// Nombre de champs touchés et valides
    pub fn valid_count(&self) -> usize {
        self.valid_count
    }

    /// Toujours `100 * valid_count / TOTAL_FIELDS`
    pub fn progress_percent(&self) -> f64 {
        100.0 * self.valid_count as f64 / TOTAL_FIELDS as f64
    }

    /// Compteur de rendus: une incrémentation par événement traité
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Vrai si aucun champ n'a été touché depuis la dernière réinitialisation
    pub fn is_pristine(&self) -> bool {
        self.fields.iter().all(|state| !state.touched)
    }

    /// Met à jour un champ, le réévalue puis recalcule la progression.
    pub fn on_field_change(
        &mut self,
        field: FieldName,
        value: impl Into<FieldValue>,
    ) -> Result<(), SessionError> {
        let value = value.into();
        if value.kind() != field.kind() {
            return Err(SessionError::WrongKind {
                field,
                expected: field.kind(),
                received: value.kind(),
            });
        }

        let error = evaluate(field, &value).err();
        let state = &mut self.fields[field.index()];
        state.value = value;
        state.touched = true;
        state.error = error;

        // Le mot de passe n'est jamais journalisé, ni aucune autre valeur
        match error {
            Some(violation) => debug!("Champ {field} invalide: {violation}"),
            None => debug!("Champ {field} valide"),
        }

        self.recount();
        self.revision += 1;
        Ok(())
    }

    /// Valide tous les champs, touchés ou non, puis réinitialise le
    /// formulaire si tout est valide.
    ///
    /// En cas de refus l'état n'est pas modifié.
    pub fn on_submit(&mut self) -> Result<Acknowledgment, SubmitBlocked> {
        let violations: Vec<(FieldName, RuleViolation)> = FieldName::iter()
            .filter_map(|field| {
                evaluate(field, &self.field(field).value)
                    .err()
                    .map(|violation| (field, violation))
            })
            .collect();

        if !violations.is_empty() {
            info!("Soumission refusée, {} champ(s) invalide(s)", violations.len());
            return Err(SubmitBlocked { violations });
        }

        info!("Formulaire soumis avec succès");
        self.reset();
        Ok(Acknowledgment)
    }

    /// Retour à l'état initial: champs vides, non touchés, progression nulle.
    fn reset(&mut self) {
        let revision = self.revision + 1;
        *self = Self::new();
        self.revision = revision;
    }

    fn recount(&mut self) {
        self.valid_count = self
            .fields
            .iter()
            .filter(|state| state.counts_as_valid())
            .count();
    }
}
