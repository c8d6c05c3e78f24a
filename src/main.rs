use std::path::Path;

use anyhow::Result;
use derive_more::Display;
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use jauge::config::Config;
use jauge::consts::{ACCEPTED_EXTENSIONS, PROGRESS_BAR_WIDTH};
use jauge::models::{FieldKind, FieldName, FieldValue, SelectedFile};
use jauge::session::FormSession;
use jauge::view::ProgressView;
use log::debug;
use strum::IntoEnumIterator;

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// Représente un menu texte
trait Menu {
    /// Implémente le contenu du menu. La valeur de retour
    /// doit être None si le menu souhaite terminer,
    /// ou Some(()) s'il faut le relancer.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Lance le menu en boucle, en interceptant les erreurs,
    /// sauf si le menu souhaite quitter.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Erreur: {error}");
            }
        }
    }
}

pub struct App {
    session: FormSession,
}

impl App {
    pub fn new(session: FormSession) -> Self {
        App { session }
    }

    pub fn start(&mut self) -> Result<()> {
        println!("Form with Progress");
        self.enter_loop();
        Ok(())
    }

    /// Affiche la barre, le compteur et les erreurs des champs touchés
    fn render(&self) -> Result<()> {
        let view = ProgressView::of(&self.session);
        debug!("{}", serde_json::to_string(&view)?);

        println!("\n{}", view.bar(PROGRESS_BAR_WIDTH));
        println!("{}", view.readout());
        for error in &view.errors {
            println!("  {}: {}", error.field, error.message);
        }
        Ok(())
    }

    /// Demande la nouvelle valeur d'un champ. None si l'utilisateur annule.
    fn prompt_value(field: FieldName) -> Result<Option<FieldValue>> {
        let label = format!("{field}:");
        let value = match (field, field.kind()) {
            (FieldName::Password, _) => Password::new(&label)
                .without_confirmation()
                .with_display_mode(PasswordDisplayMode::Masked)
                .with_help_message(field.placeholder())
                .prompt_skippable()?
                .map(FieldValue::Text),
            (_, FieldKind::Text) => Text::new(&label)
                .with_placeholder(field.placeholder())
                .prompt_skippable()?
                .map(FieldValue::Text),
            (_, FieldKind::File) => {
                let Some(path) = Text::new(&label)
                    .with_placeholder(field.placeholder())
                    .with_help_message(&format!("Accepted: {ACCEPTED_EXTENSIONS} (empty to clear)"))
                    .prompt_skippable()?
                else {
                    return Ok(None);
                };

                let path = path.trim();
                if path.is_empty() {
                    Some(FieldValue::File(None))
                } else {
                    Some(SelectedFile::from_path(Path::new(path))?.into())
                }
            }
        };
        Ok(value)
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(Clone, Copy, Display)]
        enum Choice {
            #[display("{_0}")]
            Edit(FieldName),
            #[display("Submit")]
            Submit,
            #[display("Quitter")]
            Exit,
        }

        self.render()?;

        let choices: Vec<Choice> = FieldName::iter()
            .map(Choice::Edit)
            .chain([Choice::Submit, Choice::Exit])
            .collect();

        let choice = match Select::new("Que voulez-vous faire ?", choices).prompt() {
            Ok(choice) => choice,
            Err(
                InquireError::OperationCanceled
                | InquireError::OperationInterrupted
                | InquireError::NotTTY,
            ) => return Ok(MENU_EXIT),
            Err(other) => return Err(other.into()),
        };

        match choice {
            Choice::Edit(field) => {
                if let Some(value) = Self::prompt_value(field)? {
                    self.session.on_field_change(field, value)?;
                }
                Ok(MENU_LOOP)
            }
            Choice::Submit => {
                match self.session.on_submit() {
                    Ok(ack) => println!("\n[*] {ack}"),
                    Err(blocked) => {
                        println!("\n[!] {blocked}");
                        for (field, violation) in &blocked.violations {
                            println!("  {field}: {violation}");
                        }
                    }
                }
                Ok(MENU_LOOP)
            }
            Choice::Exit => Ok(MENU_EXIT),
        }
    }
}

fn main() -> Result<()> {
    let config = Config::load()?;
    simple_logging::log_to_file(&config.log_file, config.log_level)?;

    App::new(FormSession::new()).start()
}
