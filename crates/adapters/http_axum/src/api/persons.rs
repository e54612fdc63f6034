//! JSON REST handlers for persons.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use persons_app::ports::PersonRepository;
use persons_domain::id::PersonId;
use persons_domain::person::{Person, PersonDetails};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Person>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get, create and update endpoints.
pub enum PersonResponse {
    Ok(Json<Person>),
}

impl IntoResponse for PersonResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
        }
    }
}

/// `GET /persons`
pub async fn list<PR>(State(state): State<AppState<PR>>) -> Result<ListResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let persons = state.person_service.list_persons().await?;
    Ok(ListResponse::Ok(Json(persons)))
}

/// `GET /persons/:id`
pub async fn get<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<PersonId>,
) -> Result<PersonResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let person = state.person_service.get_person(id).await?;
    Ok(PersonResponse::Ok(Json(person)))
}

/// `POST /persons`
pub async fn create<PR>(
    State(state): State<AppState<PR>>,
    Json(req): Json<PersonDetails>,
) -> Result<PersonResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let created = state.person_service.create_person(req).await?;
    Ok(PersonResponse::Ok(Json(created)))
}

/// `PUT /persons/:id`
pub async fn update<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<PersonId>,
    Json(req): Json<PersonDetails>,
) -> Result<PersonResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let updated = state.person_service.update_person(id, req).await?;
    Ok(PersonResponse::Ok(Json(updated)))
}

/// `DELETE /persons/:id`
pub async fn delete<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<PersonId>,
) -> Result<DeleteResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    state.person_service.delete_person(id).await?;
    Ok(DeleteResponse::Ok)
}
