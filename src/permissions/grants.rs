//! Insertion-ordered grant collection keyed by subject

use super::subject::{Subject, SubjectType};

/// Grants keyed by subject, in the order subjects were first added
///
/// Adding grants for a subject that is already present replaces its entry in
/// place. A subject never appears twice.
#[derive(Debug, Clone, PartialEq)]
pub struct GrantSet<E> {
    entries: Vec<(Subject, E)>,
}

impl<E> Default for GrantSet<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E> GrantSet<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grants for a subject, replacing any earlier entry
    pub fn add_grants(&mut self, subject: Subject, entry: E) -> &mut Self {
        match self.entries.iter_mut().find(|(s, _)| *s == subject) {
            Some(slot) => slot.1 = entry,
            None => self.entries.push((subject, entry)),
        }
        self
    }

    /// Drop a subject's grants; no-op when absent
    pub fn remove_grants(&mut self, subject_type: SubjectType, subject_id: &str) -> &mut Self {
        self.entries
            .retain(|(s, _)| !s.matches(subject_type, subject_id));
        self
    }

    pub fn get(&self, subject: &Subject) -> Option<&E> {
        self.entries
            .iter()
            .find(|(s, _)| s == subject)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Subject, &E)> {
        self.entries.iter().map(|(s, entry)| (s, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_grants_twice_keeps_second_list() {
        let mut set = GrantSet::new();
        set.add_grants(Subject::user("u1"), vec!["BROWSE_PROJECTS"]);
        set.add_grants(Subject::user("u1"), vec!["ADD_COMMENTS", "EDIT_ISSUES"]);

        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get(&Subject::user("u1")).unwrap(),
            &vec!["ADD_COMMENTS", "EDIT_ISSUES"]
        );
    }

    #[test]
    fn test_replacement_keeps_position() {
        let mut set = GrantSet::new();
        set.add_grants(Subject::user("u1"), 1)
            .add_grants(Subject::group("g1"), 2)
            .add_grants(Subject::user("u1"), 3);

        let order: Vec<(String, i32)> = set.iter().map(|(s, e)| (s.to_string(), *e)).collect();
        assert_eq!(
            order,
            vec![("user:u1".to_string(), 3), ("group:g1".to_string(), 2)]
        );
    }

    #[test]
    fn test_same_id_different_type_are_distinct() {
        let mut set = GrantSet::new();
        set.add_grants(Subject::user("x"), ());
        set.add_grants(Subject::group("x"), ());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove_grants() {
        let mut set = GrantSet::new();
        set.add_grants(Subject::user("u1"), ());
        set.add_grants(Subject::group("g1"), ());

        set.remove_grants(SubjectType::User, "u1");
        assert_eq!(set.len(), 1);
        assert!(set.get(&Subject::user("u1")).is_none());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut set: GrantSet<()> = GrantSet::new();
        set.add_grants(Subject::group("g1"), ());
        set.remove_grants(SubjectType::Group, "missing");
        set.remove_grants(SubjectType::User, "g1");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_empty() {
        let set: GrantSet<Vec<String>> = GrantSet::default();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
