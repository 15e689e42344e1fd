//! Persons resource handlers
//!
//! Four operations: list all, get by identifier, list by colour, create.
//! Wire field names (name, lastname, zipcode, city, color) differ from the
//! domain names and are fixed by the existing API contract.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persons_common::{Colour, Person, PersonId};
use serde::{Deserialize, Serialize};

use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Request body for POST /persons
#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    pub name: String,
    pub lastname: String,
    pub zipcode: String,
    pub city: String,
    pub color: String,
}

/// Wire representation of a person
#[derive(Debug, Serialize)]
pub struct PersonResponse {
    pub id: i64,
    pub name: String,
    pub lastname: String,
    pub zipcode: String,
    pub city: String,
    pub color: String,
}

impl From<Person> for PersonResponse {
    fn from(p: Person) -> Self {
        Self {
            id: p.id.value(),
            name: p.first_name,
            lastname: p.last_name,
            zipcode: p.zip_code,
            city: p.city,
            color: p.colour.as_str().to_string(),
        }
    }
}

/// GET /persons
///
/// All persons in identifier order.
pub async fn list_persons(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PersonResponse>>> {
    let persons = db::persons::get_all(&state.db).await?;
    Ok(Json(persons.into_iter().map(PersonResponse::from).collect()))
}

/// GET /persons/:id
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<PersonResponse>> {
    let id = PersonId::new(id)
        .map_err(|_| ApiError::BadRequest("id must be greater than 0".to_string()))?;

    match db::persons::get_by_id(&state.db, id).await? {
        Some(person) => Ok(Json(person.into())),
        None => Err(ApiError::NotFound(format!("No person with id {id}"))),
    }
}

/// GET /persons/color/:color
///
/// The colour is normalized before lookup, so ASCII fallback spellings and
/// mixed case match the canonical stored form.
pub async fn get_persons_by_colour(
    State(state): State<AppState>,
    Path(color): Path<String>,
) -> ApiResult<Json<Vec<PersonResponse>>> {
    let colour = Colour::parse(&color)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let persons = db::persons::get_by_colour(&state.db, colour).await?;
    Ok(Json(persons.into_iter().map(PersonResponse::from).collect()))
}

/// POST /persons
///
/// Assigns identifier = current max + 1. The UNIQUE index on person_id turns
/// a concurrent create racing the same identifier into a 409 instead of
/// silent corruption.
pub async fn create_person(
    State(state): State<AppState>,
    Json(request): Json<CreatePersonRequest>,
) -> ApiResult<(StatusCode, Json<PersonResponse>)> {
    let fields = [
        ("name", &request.name),
        ("lastname", &request.lastname),
        ("zipcode", &request.zipcode),
        ("city", &request.city),
        ("color", &request.color),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(ApiError::BadRequest(format!(
                "Field '{field}' must not be empty"
            )));
        }
    }

    let colour = Colour::parse(&request.color)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let next_id = db::persons::max_person_id(&state.db).await? + 1;

    let person = Person {
        id: PersonId::new(next_id).map_err(|e| ApiError::Internal(e.to_string()))?,
        first_name: request.name.trim().to_string(),
        last_name: request.lastname.trim().to_string(),
        zip_code: request.zipcode.trim().to_string(),
        city: request.city.trim().to_string(),
        colour,
    };

    db::persons::insert(&state.db, &person).await?;

    Ok((StatusCode::CREATED, Json(person.into())))
}
