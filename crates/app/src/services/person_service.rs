//! Person service — use-cases for managing persons.

use persons_domain::error::{NotFoundError, PersonsError};
use persons_domain::id::PersonId;
use persons_domain::person::{Person, PersonDetails};

use crate::ports::PersonRepository;

/// Application service for person CRUD operations.
pub struct PersonService<R> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all persons.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_persons(&self) -> Result<Vec<Person>, PersonsError> {
        let persons = self.repo.get_all().await?;
        tracing::debug!(count = persons.len(), "listed persons");
        Ok(persons)
    }

    /// Look up a person by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PersonsError::NotFound`] when no person with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_person(&self, id: PersonId) -> Result<Person, PersonsError> {
        let person = self.find(id).await?;
        tracing::debug!(person_id = %id, "fetched person");
        Ok(person)
    }

    /// Store a new person. The id is assigned by the repository.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_person(&self, details: PersonDetails) -> Result<Person, PersonsError> {
        let created = self.repo.create(details).await?;
        tracing::info!(person_id = %created.id, "person created");
        Ok(created)
    }

    /// Overwrite name and age of an existing person, keeping its id.
    ///
    /// # Errors
    ///
    /// Returns [`PersonsError::NotFound`] when no person with `id` exists;
    /// nothing is written in that case.
    pub async fn update_person(
        &self,
        id: PersonId,
        details: PersonDetails,
    ) -> Result<Person, PersonsError> {
        let existing = self.find(id).await?;
        let updated = self.repo.update(existing.with_details(details)).await?;
        tracing::info!(person_id = %id, "person updated");
        Ok(updated)
    }

    /// Delete an existing person.
    ///
    /// # Errors
    ///
    /// Returns [`PersonsError::NotFound`] when no person with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_person(&self, id: PersonId) -> Result<(), PersonsError> {
        let existing = self.find(id).await?;
        self.repo.delete(existing.id).await?;
        tracing::info!(person_id = %id, "person deleted");
        Ok(())
    }

    async fn find(&self, id: PersonId) -> Result<Person, PersonsError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: PersonId) -> PersonsError {
    NotFoundError {
        entity: "Person",
        id: id.to_string(),
    }
    .into()
}
