//! Application core for the legal-aid case reporting desktop app: the
//! in-memory case store, the search/filter derivation, the form submission
//! state machine, the Gemini-backed draft autofill client, spreadsheet
//! export, and settings loading. The GUI crate drives everything in here
//! from discrete UI events.

pub mod autofill;
pub mod config;
pub mod export;
pub mod form;
pub mod search;
pub mod store;

pub use autofill::{AutofillClient, AutofillError, AutofillFields};
pub use config::{load_settings, Settings};
pub use export::{case_row, export_file_name, write_csv, ExportError, EXPORT_HEADERS};
pub use form::{AutofillRejection, FormController, SubmitPhase, SubmitRejection};
pub use search::filter_cases;
pub use store::CaseStore;
