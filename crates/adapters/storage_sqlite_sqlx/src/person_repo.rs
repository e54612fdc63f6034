//! `SQLite` implementation of [`PersonRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use persons_app::ports::PersonRepository;
use persons_domain::error::PersonsError;
use persons_domain::id::PersonId;
use persons_domain::person::{Person, PersonDetails};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Person`].
struct Wrapper(Person);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Person> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let age: i32 = row.try_get("age")?;

        Ok(Self(Person {
            id: PersonId::from_raw(id),
            name,
            age,
        }))
    }
}

const INSERT: &str = "INSERT INTO persons (name, age) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, age FROM persons WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, age FROM persons";
const UPDATE: &str = "UPDATE persons SET name = ?, age = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM persons WHERE id = ?";

/// `SQLite`-backed person repository.
pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PersonRepository for SqlitePersonRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, PersonsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, PersonsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_raw())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn create(
        &self,
        details: PersonDetails,
    ) -> impl Future<Output = Result<Person, PersonsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&details.name)
                .bind(details.age)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Person {
                id: PersonId::from_raw(result.last_insert_rowid()),
                name: details.name,
                age: details.age,
            })
        }
    }

    fn update(&self, person: Person) -> impl Future<Output = Result<Person, PersonsError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&person.name)
                .bind(person.age)
                .bind(person.id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(person)
        }
    }

    fn delete(&self, id: PersonId) -> impl Future<Output = Result<(), PersonsError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
