//! In-memory case list. The store is owned by the top-level application
//! state and mutated only through [`CaseStore::add`]; there is no update or
//! delete operation, and the list is lost on process exit.

use chrono::Utc;
use shared::domain::{Case, CaseDraft, CaseId};

#[derive(Debug, Default)]
pub struct CaseStore {
    cases: Vec<Case>,
}

impl CaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a case from a validated draft, assigns a fresh id and the
    /// current timestamp, and prepends it (newest first). Validation of the
    /// required fields happens upstream in the form controller; `add`
    /// itself always succeeds.
    pub fn add(&mut self, draft: CaseDraft) -> Case {
        let notes = draft.notes.trim();
        let case = Case {
            id: CaseId::generate(),
            case_name: draft.case_name,
            file_code: draft.file_code,
            legal_aid_provider: draft.legal_aid_provider,
            success_criterion: draft.success_criterion,
            quality: draft.quality,
            notes: if notes.is_empty() {
                None
            } else {
                Some(notes.to_string())
            },
            submission_date: Utc::now(),
        };
        self.cases.insert(0, case.clone());
        case
    }

    /// Current list, newest first.
    pub fn all(&self) -> &[Case] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
