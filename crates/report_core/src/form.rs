//! Form submission lifecycle: `Editing -> Submitting -> Success`, with the
//! independent AI-autofill sub-flow. The controller owns the draft and the
//! outstanding-request guards; the GUI renders from it and drives the
//! transitions on UI and backend events.

use shared::domain::CaseDraft;
use shared::error::ValidationError;

use crate::autofill::AutofillFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    /// Draft fields mutable; submit and autofill available.
    #[default]
    Editing,
    /// A submission round trip is outstanding; the submit trigger is
    /// disabled so a second submit cannot start.
    Submitting,
    /// Confirmation shown; reverts to `Editing` after a fixed display
    /// interval driven by the UI.
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A submission is already outstanding.
    InFlight,
    /// A required field was empty; the form stays in `Editing`.
    Invalid(ValidationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutofillRejection {
    EmptyDescription,
    /// An autofill request is already outstanding.
    InFlight,
}

#[derive(Debug, Default)]
pub struct FormController {
    draft: CaseDraft,
    phase: SubmitPhase,
    validation_error: Option<ValidationError>,
    autofill_in_flight: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &CaseDraft {
        &self.draft
    }

    /// Field-level access for the form widgets. Widgets are disabled by the
    /// GUI outside `Editing`, so edits only land while editing.
    pub fn draft_mut(&mut self) -> &mut CaseDraft {
        &mut self.draft
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn validation_error(&self) -> Option<ValidationError> {
        self.validation_error
    }

    pub fn autofill_in_flight(&self) -> bool {
        self.autofill_in_flight
    }

    /// Attempts the `Editing -> Submitting` transition. On success returns
    /// a snapshot of the draft for the backend round trip; the draft itself
    /// stays in place until the round trip completes.
    pub fn begin_submit(&mut self) -> Result<CaseDraft, SubmitRejection> {
        if self.phase != SubmitPhase::Editing {
            return Err(SubmitRejection::InFlight);
        }
        if let Some(field) = self.draft.first_missing_field() {
            let error = ValidationError::missing(field);
            self.validation_error = Some(error);
            return Err(SubmitRejection::Invalid(error));
        }
        self.validation_error = None;
        self.phase = SubmitPhase::Submitting;
        Ok(self.draft.clone())
    }

    /// `Submitting -> Success`; the draft is reset to defaults. The caller
    /// adds the submitted draft to the store.
    pub fn complete_submit(&mut self) {
        if self.phase == SubmitPhase::Submitting {
            self.draft = CaseDraft::default();
            self.phase = SubmitPhase::Success;
        }
    }

    /// Backend round trip failed; back to `Editing` with the draft intact
    /// so nothing typed is lost.
    pub fn abort_submit(&mut self) {
        if self.phase == SubmitPhase::Submitting {
            self.phase = SubmitPhase::Editing;
        }
    }

    /// `Success -> Editing`, called by the UI once the confirmation has
    /// been displayed for its fixed interval.
    pub fn acknowledge_success(&mut self) {
        if self.phase == SubmitPhase::Success {
            self.phase = SubmitPhase::Editing;
        }
    }

    /// Guards the autofill sub-flow: one outstanding request at a time and
    /// a non-empty description. Returns the trimmed description to send.
    pub fn begin_autofill(&mut self, description: &str) -> Result<String, AutofillRejection> {
        if self.autofill_in_flight {
            return Err(AutofillRejection::InFlight);
        }
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(AutofillRejection::EmptyDescription);
        }
        self.autofill_in_flight = true;
        Ok(trimmed.to_string())
    }

    /// Overwrites the four text fields and the notes with the AI response,
    /// falling back to empty strings for omitted fields. `quality` is left
    /// untouched; the submit machine is not involved.
    pub fn apply_autofill(&mut self, fields: AutofillFields) {
        self.draft.case_name = fields.case_name;
        self.draft.file_code = fields.file_code;
        self.draft.legal_aid_provider = fields.legal_aid_provider;
        self.draft.success_criterion = fields.success_criterion;
        self.draft.notes = fields.notes.unwrap_or_default();
        self.autofill_in_flight = false;
    }

    /// Autofill failed; the draft is left exactly as it was. The UI owns
    /// the error message.
    pub fn fail_autofill(&mut self) {
        self.autofill_in_flight = false;
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
