use super::domain::{Candidate, Gender};

/// Free-text search plus the four per-field constraints applied to a
/// roster. Field constraints are independent; an unset field passes
/// every candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterFilter {
    pub search: String,
    pub gender: Option<Gender>,
    pub role: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
}

impl RosterFilter {
    pub fn is_neutral(&self) -> bool {
        self.search.is_empty()
            && self.gender.is_none()
            && self.role.is_none()
            && self.city.is_none()
            && self.address.is_none()
    }

    /// Clear every constraint without touching any fetched data.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// All five predicates ANDed. The search box is the one asymmetric
    /// rule: the name match is case-insensitive while the phone match is
    /// a plain substring, and the two are ORed with each other.
    pub fn matches(&self, candidate: &Candidate) -> bool {
        self.matches_search(candidate)
            && self
                .gender
                .map_or(true, |gender| candidate.gender == gender.label())
            && field_passes(self.role.as_deref(), &candidate.role)
            && field_passes(self.city.as_deref(), &candidate.city)
            && field_passes(self.address.as_deref(), &candidate.address)
    }

    fn matches_search(&self, candidate: &Candidate) -> bool {
        if self.search.is_empty() {
            return true;
        }
        contains_ignore_case(&candidate.full_name, &self.search)
            || candidate.phone_number.contains(&self.search)
    }
}

fn field_passes(constraint: Option<&str>, value: &str) -> bool {
    match constraint {
        None => true,
        Some(needle) if needle.is_empty() => true,
        Some(needle) => contains_ignore_case(value, needle),
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Select the candidates satisfying `filter`, preserving their relative
/// order. Pure and total: an empty result is a valid outcome, never an
/// error.
pub fn visible<'a>(candidates: &'a [Candidate], filter: &RosterFilter) -> Vec<&'a Candidate> {
    candidates
        .iter()
        .filter(|candidate| filter.matches(candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::domain::CandidateId;

    fn candidate(name: &str, phone: &str, role: &str, gender: &str) -> Candidate {
        Candidate {
            id: CandidateId(name.to_lowercase().replace(' ', "-")),
            full_name: name.to_string(),
            phone_number: phone.to_string(),
            role: role.to_string(),
            gender: gender.to_string(),
            city: "Lucknow".to_string(),
            address: "MG Road".to_string(),
        }
    }

    fn roster() -> Vec<Candidate> {
        vec![
            candidate("Asha Rao", "9876500000", "Volunteer", "Female"),
            candidate("Vikram Singh", "9123400000", "Speaker", "Male"),
            candidate("Meera Nair", "9988700000", "Volunteer Lead", "Female"),
        ]
    }

    #[test]
    fn neutral_filter_is_identity() {
        let candidates = roster();
        let filter = RosterFilter::default();
        assert!(filter.is_neutral());

        let result = visible(&candidates, &filter);
        assert_eq!(result.len(), candidates.len());
        for (kept, original) in result.iter().zip(&candidates) {
            assert_eq!(*kept, original);
        }
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let candidates = roster();
        let filter = RosterFilter {
            search: "asha".to_string(),
            ..RosterFilter::default()
        };

        let result = visible(&candidates, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].full_name, "Asha Rao");
    }

    #[test]
    fn search_matches_phone_by_plain_substring() {
        let candidates = roster();
        let filter = RosterFilter {
            search: "987".to_string(),
            ..RosterFilter::default()
        };

        // "987" is nowhere in the name but is a phone prefix.
        let result = visible(&candidates, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].phone_number, "9876500000");
    }

    #[test]
    fn gender_filter_is_exact() {
        let candidates = roster();
        let filter = RosterFilter {
            gender: Some(Gender::Male),
            ..RosterFilter::default()
        };

        let result = visible(&candidates, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].full_name, "Vikram Singh");

        // A single-candidate roster with no male entries filters to empty.
        let solo = vec![candidate("Asha Rao", "9876500000", "Volunteer", "Female")];
        assert!(visible(&solo, &filter).is_empty());
    }

    #[test]
    fn role_filter_is_case_insensitive_substring() {
        let candidates = vec![
            candidate("Asha Rao", "9876500000", "Volunteer", "Female"),
            candidate("Vikram Singh", "9123400000", "Speaker", "Male"),
        ];
        let filter = RosterFilter {
            role: Some("volun".to_string()),
            ..RosterFilter::default()
        };

        let result = visible(&candidates, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].role, "Volunteer");
    }

    #[test]
    fn constraints_compose_with_and() {
        let candidates = roster();
        let filter = RosterFilter {
            search: "99".to_string(),
            gender: Some(Gender::Female),
            role: Some("lead".to_string()),
            ..RosterFilter::default()
        };

        let result = visible(&candidates, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].full_name, "Meera Nair");
    }

    #[test]
    fn result_preserves_relative_order() {
        let candidates = roster();
        let filter = RosterFilter {
            gender: Some(Gender::Female),
            ..RosterFilter::default()
        };

        let result = visible(&candidates, &filter);
        let names: Vec<&str> = result.iter().map(|c| c.full_name.as_str()).collect();
        assert_eq!(names, vec!["Asha Rao", "Meera Nair"]);
    }

    #[test]
    fn every_retained_candidate_satisfies_all_active_rules() {
        let candidates = roster();
        let filter = RosterFilter {
            search: "a".to_string(),
            role: Some("volunteer".to_string()),
            ..RosterFilter::default()
        };

        let retained = visible(&candidates, &filter);
        for kept in &retained {
            assert!(filter.matches(kept));
        }
        for candidate in &candidates {
            if filter.matches(candidate) {
                assert!(retained.iter().any(|kept| kept.id == candidate.id));
            }
        }
    }

    #[test]
    fn empty_string_constraints_pass_everything() {
        let candidates = roster();
        let filter = RosterFilter {
            role: Some(String::new()),
            city: Some(String::new()),
            address: Some(String::new()),
            ..RosterFilter::default()
        };

        assert_eq!(visible(&candidates, &filter).len(), candidates.len());
    }
}
