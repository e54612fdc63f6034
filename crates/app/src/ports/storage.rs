//! Storage port — repository trait for persistence.

use std::future::Future;

use persons_domain::error::PersonsError;
use persons_domain::id::PersonId;
use persons_domain::person::{Person, PersonDetails};

/// Persistence operations for [`Person`] records.
///
/// `create` and `update` together form the classic "save" operation: a record
/// without an id is inserted and receives one from the store, a record with an
/// id overwrites the stored attributes.
pub trait PersonRepository {
    /// Return every stored person. Order is unspecified.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, PersonsError>> + Send;

    /// Look up a person by id.
    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, PersonsError>> + Send;

    /// Insert a new person; the store assigns the id.
    fn create(
        &self,
        details: PersonDetails,
    ) -> impl Future<Output = Result<Person, PersonsError>> + Send;

    /// Overwrite the name and age stored under `person.id`.
    fn update(&self, person: Person) -> impl Future<Output = Result<Person, PersonsError>> + Send;

    /// Remove the person stored under `id`.
    fn delete(&self, id: PersonId) -> impl Future<Output = Result<(), PersonsError>> + Send;
}
