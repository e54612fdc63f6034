//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod persons;

use axum::Router;
use axum::routing::get;

use persons_app::ports::PersonRepository;

use crate::state::AppState;

/// Build the `/persons` routes.
pub fn routes<PR>() -> Router<AppState<PR>>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/persons", get(persons::list::<PR>).post(persons::create::<PR>))
        .route(
            "/persons/{id}",
            get(persons::get::<PR>)
                .put(persons::update::<PR>)
                .delete(persons::delete::<PR>),
        )
}
