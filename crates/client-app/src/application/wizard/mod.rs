//! Book creation wizard and its draft state

mod book_wizard;
mod draft;

pub use book_wizard::{
    BookWizard, CharacterLoad, SubmitOutcome, WizardObserver, WizardSnapshot, WizardStep,
};
pub use draft::BookDraft;
