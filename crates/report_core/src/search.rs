//! Pure search derivation over the case list. Recomputed on every query
//! keystroke; no side effects, no ranking.

use shared::domain::Case;

/// Case-insensitive substring filter across the four identifying fields
/// (name, file code, provider, success criterion). An empty query is the
/// identity; input order is always preserved.
pub fn filter_cases<'a>(cases: &'a [Case], query: &str) -> Vec<&'a Case> {
    if query.is_empty() {
        return cases.iter().collect();
    }
    let needle = query.to_lowercase();
    cases
        .iter()
        .filter(|case| {
            case.case_name.to_lowercase().contains(&needle)
                || case.file_code.to_lowercase().contains(&needle)
                || case.legal_aid_provider.to_lowercase().contains(&needle)
                || case.success_criterion.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::domain::{CaseId, CaseQuality};

    fn case(name: &str, code: &str, provider: &str, criterion: &str) -> Case {
        Case {
            id: CaseId::generate(),
            case_name: name.to_string(),
            file_code: code.to_string(),
            legal_aid_provider: provider.to_string(),
            success_criterion: criterion.to_string(),
            quality: CaseQuality::Good,
            notes: None,
            submission_date: Utc::now(),
        }
    }

    fn sample() -> Vec<Case> {
        vec![
            case("Vu an A", "HS-1", "Nguyen Van X", "Thanh cong"),
            case("Vu an B", "HS-2", "Tran Thi Y", "Hoa giai"),
            case("Tranh chap dat dai", "HS-3", "Nguyen Van X", "Thang kien"),
        ]
    }

    #[test]
    fn empty_query_is_the_identity() {
        let cases = sample();
        let filtered = filter_cases(&cases, "");
        assert_eq!(filtered.len(), cases.len());
        for (kept, original) in filtered.iter().zip(cases.iter()) {
            assert_eq!(kept.id, original.id);
        }
    }

    #[test]
    fn matches_any_of_the_four_fields() {
        let cases = sample();
        assert_eq!(filter_cases(&cases, "Vu an").len(), 2);
        assert_eq!(filter_cases(&cases, "HS-2").len(), 1);
        assert_eq!(filter_cases(&cases, "Nguyen").len(), 2);
        assert_eq!(filter_cases(&cases, "Hoa giai").len(), 1);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let cases = sample();
        let lower = filter_cases(&cases, "hs-1");
        let upper = filter_cases(&cases, "HS-1");
        let mixed = filter_cases(&cases, "Hs-1");
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].id, upper[0].id);
        assert_eq!(lower[0].id, mixed[0].id);
    }

    #[test]
    fn filtering_is_idempotent() {
        let cases = sample();
        let once: Vec<Case> = filter_cases(&cases, "nguyen")
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_cases(&once, "nguyen");
        assert_eq!(twice.len(), once.len());
        for (a, b) in twice.iter().zip(once.iter()) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn finds_exactly_the_stored_case_by_file_code() {
        let cases = vec![case("Vu an A", "HS-1", "Nguyen Van X", "Thanh cong")];
        let hit = filter_cases(&cases, "HS-1");
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].file_code, "HS-1");
        assert!(filter_cases(&cases, "zzz").is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let cases = sample();
        let filtered = filter_cases(&cases, "nguyen");
        assert_eq!(filtered[0].file_code, "HS-1");
        assert_eq!(filtered[1].file_code, "HS-3");
    }
}
