//! Définition des constantes globales pour le formulaire.

pub const TOTAL_FIELDS: usize = 5; // name, email, password, mobile, file

pub const NAME_PATTERN: &str = r"^[A-Za-z\s]{2,50}$";
/// Forme `local@domaine`; le domaine est ensuite vérifié en unités UTF-16.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@(?P<domain>[^\s@]+)$";
pub const MIN_TLD_LENGTH: usize = 2;
pub const PASSWORD_PATTERN: &str = r"^[A-Za-z0-9$@_%&#]+$";
pub const MOBILE_PATTERN: &str = r"^[1-9][0-9]{9}$";

pub const MAX_EMAIL_LENGTH: usize = 60;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 14;

/// Taille maximale d'un fichier téléversé (2 MiB)
pub const MAX_FILE_SIZE: u64 = 2 * 1024 * 1024;

pub const ALLOWED_MIME_TYPES: [&str; 4] = ["image/png", "image/jpeg", "image/jpg", "image/avif"];

/// Filtre affiché au sélecteur de fichier, à titre indicatif seulement.
pub const ACCEPTED_EXTENSIONS: &str = ".jpg,.jpeg,.png,.avif";

pub const SUBMIT_ACKNOWLEDGMENT: &str = "Form submitted successfully!";

pub const DEFAULT_LOG_FILE: &str = "./jauge.log"; // Fichier de log par défaut.
pub const LOG_FILE_VAR: &str = "JAUGE_LOG_FILE";
pub const LOG_LEVEL_VAR: &str = "JAUGE_LOG_LEVEL";

pub const PROGRESS_BAR_WIDTH: usize = 30;
