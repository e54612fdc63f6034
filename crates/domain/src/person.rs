//! Person — the single record type managed by the service.

use serde::{Deserialize, Serialize};

use crate::id::PersonId;

/// A stored person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub age: i32,
}

impl Person {
    /// Return this record with `name` and `age` taken from `details`.
    ///
    /// The identifier is preserved.
    #[must_use]
    pub fn with_details(self, details: PersonDetails) -> Self {
        Self {
            id: self.id,
            name: details.name,
            age: details.age,
        }
    }
}

/// Client-supplied attributes of a person, without identity.
///
/// Used as the body of create and update requests. An `id` field in the
/// incoming JSON is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonDetails {
    pub name: String,
    pub age: i32,
}

impl PersonDetails {
    #[must_use]
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Person {
        Person {
            id: PersonId::from_raw(1),
            name: "Alice".to_string(),
            age: 30,
        }
    }

    #[test]
    fn should_keep_id_when_applying_details() {
        let updated = alice().with_details(PersonDetails::new("Bob", 40));
        assert_eq!(updated.id, PersonId::from_raw(1));
        assert_eq!(updated.name, "Bob");
        assert_eq!(updated.age, 40);
    }

    #[test]
    fn should_serialize_with_id_name_and_age_fields() {
        let json = serde_json::to_value(alice()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "name": "Alice", "age": 30 })
        );
    }

    #[test]
    fn should_ignore_id_when_deserializing_details() {
        let details: PersonDetails =
            serde_json::from_str(r#"{"id": 99, "name": "Carol", "age": 25}"#).unwrap();
        assert_eq!(details, PersonDetails::new("Carol", 25));
    }

    #[test]
    fn should_reject_details_without_age() {
        let result: Result<PersonDetails, _> = serde_json::from_str(r#"{"name": "Dan"}"#);
        assert!(result.is_err());
    }
}
