use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Serialize, Serializer};

/// A course/subject row parsed from a schedule document.
///
/// Serializes as `{"name", "tp", "maxAbsences"}`; the code is only the
/// de-duplication key and is not part of the JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    #[serde(skip_serializing)]
    pub code: String,
    pub name: String,
    /// Class modality code (e.g. "T", "P", "BASICA").
    pub tp: String,
    #[serde(rename = "maxAbsences")]
    pub max_absences: u64,
}

/// Subjects keyed by code, in first-appearance order.
///
/// Re-inserting an existing code replaces its values but keeps the slot it
/// was first inserted at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectList {
    entries: IndexMap<String, Subject>,
}

impl SubjectList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite by code. Returns the previous record, if any.
    pub fn upsert(&mut self, subject: Subject) -> Option<Subject> {
        match self.entries.entry(subject.code.clone()) {
            Entry::Occupied(mut slot) => Some(slot.insert(subject)),
            Entry::Vacant(slot) => {
                slot.insert(subject);
                None
            }
        }
    }

    pub fn get(&self, code: &str) -> Option<&Subject> {
        self.entries.get(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subject> {
        self.entries.values()
    }

    pub fn into_vec(self) -> Vec<Subject> {
        self.entries.into_values().collect()
    }
}

impl Serialize for SubjectList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(code: &str, name: &str, tp: &str, max_absences: u64) -> Subject {
        Subject {
            code: code.to_string(),
            name: name.to_string(),
            tp: tp.to_string(),
            max_absences,
        }
    }

    #[test]
    fn test_upsert_keeps_first_position() {
        let mut list = SubjectList::new();
        list.upsert(subject("101", "Calculo", "T", 10));
        list.upsert(subject("202", "Fisica", "P", 5));
        let prev = list.upsert(subject("101", "Calculo Ii", "P", 8));

        assert_eq!(prev.map(|s| s.name), Some("Calculo".to_string()));
        assert_eq!(list.len(), 2);
        assert_eq!(list.codes().collect::<Vec<_>>(), vec!["101", "202"]);
        assert_eq!(list.get("101").unwrap().name, "Calculo Ii");
        assert_eq!(list.get("101").unwrap().max_absences, 8);
    }

    #[test]
    fn test_json_shape_omits_code() {
        let mut list = SubjectList::new();
        list.upsert(subject("101", "Matemática", "BASICA", 0));
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"name": "Matemática", "tp": "BASICA", "maxAbsences": 0}])
        );
    }

    #[test]
    fn test_empty_list() {
        let list = SubjectList::new();
        assert!(list.is_empty());
        assert_eq!(serde_json::to_string(&list).unwrap(), "[]");
        assert!(list.into_vec().is_empty());
    }
}
