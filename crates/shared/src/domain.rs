use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseId(pub Uuid);

impl CaseId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Outcome rating for a recorded case. Closed set; any other token is
/// rejected at the serde boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseQuality {
    Good,
    Fair,
}

impl CaseQuality {
    /// Display label used in the list badge and the exported report.
    pub fn label(self) -> &'static str {
        match self {
            CaseQuality::Good => "Tốt",
            CaseQuality::Fair => "Khá",
        }
    }
}

/// A recorded successful legal-aid matter. Constructed only by the case
/// store; `id` and `submission_date` are fixed at creation and the record
/// is never updated or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    pub case_name: String,
    pub file_code: String,
    pub legal_aid_provider: String,
    pub success_criterion: String,
    pub quality: CaseQuality,
    pub notes: Option<String>,
    pub submission_date: DateTime<Utc>,
}

/// Form-local, in-progress case data. Not persisted; reset to defaults
/// after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDraft {
    pub case_name: String,
    pub file_code: String,
    pub legal_aid_provider: String,
    pub success_criterion: String,
    pub quality: CaseQuality,
    pub notes: String,
}

impl Default for CaseDraft {
    fn default() -> Self {
        Self {
            case_name: String::new(),
            file_code: String::new(),
            legal_aid_provider: String::new(),
            success_criterion: String::new(),
            quality: CaseQuality::Good,
            notes: String::new(),
        }
    }
}

impl CaseDraft {
    /// First required field that is empty after trimming, if any. The
    /// check order matches the form's top-to-bottom field order.
    pub fn first_missing_field(&self) -> Option<DraftField> {
        if self.case_name.trim().is_empty() {
            Some(DraftField::CaseName)
        } else if self.file_code.trim().is_empty() {
            Some(DraftField::FileCode)
        } else if self.legal_aid_provider.trim().is_empty() {
            Some(DraftField::LegalAidProvider)
        } else if self.success_criterion.trim().is_empty() {
            Some(DraftField::SuccessCriterion)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    CaseName,
    FileCode,
    LegalAidProvider,
    SuccessCriterion,
}

impl DraftField {
    pub fn form_label(self) -> &'static str {
        match self {
            DraftField::CaseName => "Tên vụ việc",
            DraftField::FileCode => "Mã hồ sơ vụ việc",
            DraftField::LegalAidProvider => "TGV thực hiện",
            DraftField::SuccessCriterion => "Tiêu chí thành công",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_labels_match_report_vocabulary() {
        assert_eq!(CaseQuality::Good.label(), "Tốt");
        assert_eq!(CaseQuality::Fair.label(), "Khá");
    }

    #[test]
    fn quality_rejects_unknown_tokens_at_the_serde_boundary() {
        assert!(serde_json::from_str::<CaseQuality>("\"good\"").is_ok());
        assert!(serde_json::from_str::<CaseQuality>("\"fair\"").is_ok());
        assert!(serde_json::from_str::<CaseQuality>("\"excellent\"").is_err());
    }

    #[test]
    fn default_draft_is_empty_with_good_quality() {
        let draft = CaseDraft::default();
        assert_eq!(draft.quality, CaseQuality::Good);
        assert!(draft.case_name.is_empty());
        assert!(draft.notes.is_empty());
        assert_eq!(draft.first_missing_field(), Some(DraftField::CaseName));
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let draft = CaseDraft {
            case_name: "Vụ án A".to_string(),
            file_code: "   ".to_string(),
            legal_aid_provider: "Nguyễn Văn X".to_string(),
            success_criterion: "Thành công".to_string(),
            ..CaseDraft::default()
        };
        assert_eq!(draft.first_missing_field(), Some(DraftField::FileCode));
    }

    #[test]
    fn complete_draft_has_no_missing_field() {
        let draft = CaseDraft {
            case_name: "Vụ án A".to_string(),
            file_code: "HS-1".to_string(),
            legal_aid_provider: "Nguyễn Văn X".to_string(),
            success_criterion: "Thành công".to_string(),
            ..CaseDraft::default()
        };
        assert_eq!(draft.first_missing_field(), None);
    }
}
