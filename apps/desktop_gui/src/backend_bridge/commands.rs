//! Backend commands queued from UI to backend worker.

use shared::domain::CaseDraft;

pub enum BackendCommand {
    /// Persistence round trip for a draft that already passed validation.
    SubmitCase { draft: CaseDraft },
    /// One-shot AI autofill request for a free-text case description.
    AutofillDraft { description: String },
}
