//! Book creation wizard
//!
//! Two steps: the user fills in the story background and picks a cast, then
//! submission creates the book and moves the wizard to its final step. The
//! wizard owns its draft exclusively; characters come from a list fetch made
//! when the wizard is activated.

use std::fmt;

use storymaker_domain::{BookId, Character, CharacterId};

use super::BookDraft;
use crate::application::services::{BookService, CharacterService};
use crate::application::Api;

/// Position in the wizard. `Completed` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    CollectingInfo,
    Completed,
}

impl WizardStep {
    pub const TOTAL: u8 = 2;

    /// 1-based step number for display.
    pub fn number(&self) -> u8 {
        match self {
            Self::CollectingInfo => 1,
            Self::Completed => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CollectingInfo => "Story background",
            Self::Completed => "Review & finish",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}: {}", self.number(), Self::TOTAL, self.label())
    }
}

/// State of the character list the cast is picked from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CharacterLoad {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<Character>),
    Failed,
}

impl CharacterLoad {
    pub fn characters(&self) -> &[Character] {
        match self {
            Self::Loaded(characters) => characters,
            _ => &[],
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Everything a view needs to render the wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSnapshot {
    pub step: WizardStep,
    pub draft: BookDraft,
    pub characters: CharacterLoad,
    pub saving: bool,
    pub error: Option<String>,
    pub book_id: Option<BookId>,
    pub can_submit: bool,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The readiness gate was closed; nothing was sent and nothing changed.
    Blocked,
    Completed(BookId),
    /// The backend or transport refused; the draft is untouched.
    Failed(String),
}

pub type WizardObserver = Box<dyn FnMut(&WizardSnapshot) + Send + 'static>;

pub struct BookWizard {
    books: BookService,
    characters: CharacterService,
    step: WizardStep,
    draft: BookDraft,
    load: CharacterLoad,
    saving: bool,
    error: Option<String>,
    book_id: Option<BookId>,
    observers: Vec<WizardObserver>,
}

impl BookWizard {
    /// A fresh wizard with an empty draft. Call [`BookWizard::activate`] to load characters.
    pub fn new(api: Api) -> Self {
        Self {
            books: BookService::new(api.clone()),
            characters: CharacterService::new(api),
            step: WizardStep::default(),
            draft: BookDraft::default(),
            load: CharacterLoad::default(),
            saving: false,
            error: None,
            book_id: None,
            observers: Vec::new(),
        }
    }

    /// Register a callback invoked after every state change.
    pub fn subscribe(&mut self, observer: impl FnMut(&WizardSnapshot) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &BookDraft {
        &self.draft
    }

    pub fn characters(&self) -> &[Character] {
        self.load.characters()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn book_id(&self) -> Option<&BookId> {
        self.book_id.as_ref()
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            step: self.step,
            draft: self.draft.clone(),
            characters: self.load.clone(),
            saving: self.saving,
            error: self.error.clone(),
            book_id: self.book_id.clone(),
            can_submit: self.can_submit(),
        }
    }

    /// Load the character list. Ignored once the wizard has completed.
    pub async fn activate(&mut self) {
        if self.step == WizardStep::Completed {
            return;
        }
        self.load = CharacterLoad::Loading;
        self.notify();

        match self.characters.list_characters().await {
            Ok(response) => {
                tracing::debug!(count = response.data.len(), "wizard loaded characters");
                self.load = CharacterLoad::Loaded(response.data);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "wizard could not load characters");
                self.load = CharacterLoad::Failed;
                self.error = Some(e.to_string());
            }
        }
        self.notify();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.edit(|draft| draft.name = name.into());
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.edit(|draft| draft.description = description.into());
    }

    pub fn set_main_character(&mut self, id: impl Into<CharacterId>) {
        self.edit(|draft| draft.set_main_character(id.into()));
    }

    pub fn clear_main_character(&mut self) {
        self.edit(BookDraft::clear_main_character);
    }

    /// No-op when `id` is the current main character.
    pub fn toggle_side_character(&mut self, id: impl Into<CharacterId>) {
        if self.step != WizardStep::CollectingInfo {
            return;
        }
        if self.draft.toggle_side_character(id.into()) {
            self.notify();
        }
    }

    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::CollectingInfo
            && self.load.is_loaded()
            && !self.saving
            && self.draft.is_complete()
    }

    /// Create the book from the current draft.
    ///
    /// On success the wizard moves to `Completed` and the draft is consumed.
    /// On failure it stays where it was with every field intact.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.can_submit() {
            tracing::debug!(step = ?self.step, saving = self.saving, "submit blocked");
            return SubmitOutcome::Blocked;
        }

        self.error = None;
        self.saving = true;
        self.notify();

        let request = self.draft.to_request(self.load.characters());
        let result = self.books.create_book(&request).await;
        self.saving = false;

        let outcome = match result {
            Ok(response) => {
                let book_id = response.data.book_id;
                tracing::info!(%book_id, name = %request.name, "book created");
                self.draft = BookDraft::default();
                self.book_id = Some(book_id.clone());
                self.step = WizardStep::Completed;
                SubmitOutcome::Completed(book_id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "book creation failed");
                let message = e.to_string();
                self.error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        };
        self.notify();
        outcome
    }

    fn edit(&mut self, change: impl FnOnce(&mut BookDraft)) {
        if self.step != WizardStep::CollectingInfo {
            return;
        }
        change(&mut self.draft);
        self.notify();
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in self.observers.iter_mut() {
            observer(&snapshot);
        }
    }
}
