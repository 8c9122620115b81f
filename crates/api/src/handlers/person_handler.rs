//! Person handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use common::{AppError, AppResult};
use domain::{
    Location, Person, PersonOut, MAX_AGE, MAX_NAME_LENGTH, MIN_AGE, PERSON_EXISTS_MESSAGE,
};

use crate::extractors::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::state::AppState;

/// Query parameters for the person detail lookup
#[derive(Debug, Deserialize, Validate)]
pub struct PersonDetailQuery {
    /// Person name, between 1 and 50 characters
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Name must be between 1 and 50 characters"))]
    pub name: Option<String>,
    /// Person age, required
    #[validate(range(min = MIN_AGE, max = MAX_AGE, message = "Age must be greater than 0 and at most 115"))]
    pub age: i32,
}

/// Echo of the detail query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub name: Option<String>,
    pub age: i32,
}

/// Person id captured from the path
#[derive(Debug, Deserialize, Validate)]
pub struct PersonIdPath {
    #[validate(range(min = 1, message = "Person id must be greater than 0"))]
    pub person_id: i64,
}

/// Confirmation that a person exists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonExists {
    pub person_id: i64,
    pub message: String,
}

/// Body of a person update: the person and where they live
#[derive(Debug, Deserialize)]
pub struct UpdatePersonRequest {
    pub person: Person,
    pub location: Location,
}

impl Validate for UpdatePersonRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = self.person.validate() {
            errors
                .errors_mut()
                .insert("person", ValidationErrorsKind::Struct(Box::new(e)));
        }
        if let Err(e) = self.location.validate() {
            errors
                .errors_mut()
                .insert("location", ValidationErrorsKind::Struct(Box::new(e)));
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Create person routes
pub fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/new", post(create_person))
        .route("/detail", get(show_person))
        .route("/detail/:person_id", get(show_person_by_id))
        .route("/:person_id", put(update_person))
}

/// Validate a person and echo it back without the password
pub async fn create_person(
    ValidatedJson(person): ValidatedJson<Person>,
) -> AppResult<(StatusCode, Json<PersonOut>)> {
    tracing::debug!(?person, "Creating person");
    Ok((StatusCode::CREATED, Json(PersonOut::from(person))))
}

/// Echo the validated detail query
pub async fn show_person(
    ValidatedQuery(query): ValidatedQuery<PersonDetailQuery>,
) -> AppResult<Json<PersonSummary>> {
    Ok(Json(PersonSummary {
        name: query.name,
        age: query.age,
    }))
}

/// Confirm a person id is known to the registry
pub async fn show_person_by_id(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<PersonIdPath>,
) -> AppResult<Json<PersonExists>> {
    let person_id = path.person_id;

    if !state.registry.exists(person_id).await? {
        tracing::debug!(person_id, "Person not found");
        return Err(AppError::not_found(format!("Person {}", person_id)));
    }

    Ok(Json(PersonExists {
        person_id,
        message: PERSON_EXISTS_MESSAGE.to_string(),
    }))
}

/// Merge a person and a location into one mapping
pub async fn update_person(
    ValidatedPath(path): ValidatedPath<PersonIdPath>,
    ValidatedJson(payload): ValidatedJson<UpdatePersonRequest>,
) -> AppResult<Json<Map<String, Value>>> {
    tracing::info!(person_id = path.person_id, "Updating person");

    let merged = PersonOut::from(payload.person).merge_location(&payload.location)?;

    Ok(Json(merged))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::ApiConfig;
    use crate::repository::MockPersonRegistry;
    use domain::{Password, PersonBase};

    fn person(age: i32) -> Person {
        Person {
            profile: PersonBase {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                age,
                hair_color: None,
                is_married: None,
                email: None,
                website: None,
            },
            password: Password::new("analytical-engine"),
        }
    }

    fn location(city: &str) -> Location {
        Location {
            city: city.to_string(),
            state: "England".to_string(),
            country: "UK".to_string(),
        }
    }

    #[test]
    fn test_update_request_nests_error_paths() {
        let request = UpdatePersonRequest {
            person: person(0),
            location: location(""),
        };

        let err = AppError::from(request.validate().unwrap_err());
        let fields: Vec<&str> = err.details().iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["location.city", "person.age"]);
    }

    #[test]
    fn test_update_request_valid() {
        let request = UpdatePersonRequest {
            person: person(30),
            location: location("London"),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_person_id_must_be_positive() {
        assert!(PersonIdPath { person_id: 0 }.validate().is_err());
        assert!(PersonIdPath { person_id: -3 }.validate().is_err());
        assert!(PersonIdPath { person_id: 1 }.validate().is_ok());
    }

    #[test]
    fn test_detail_query_age_bounds() {
        for age in [MIN_AGE - 1, MAX_AGE + 1] {
            let query = PersonDetailQuery { name: None, age };
            let errors = query.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("age"), "age {} accepted", age);
        }

        for age in [MIN_AGE, MAX_AGE] {
            assert!(PersonDetailQuery { name: None, age }.validate().is_ok());
        }
    }

    #[test]
    fn test_detail_query_name_bounds() {
        let query = PersonDetailQuery {
            name: Some(String::new()),
            age: 20,
        };
        assert!(query.validate().is_err());

        let query = PersonDetailQuery { name: None, age: 20 };
        assert!(query.validate().is_ok());
    }

    #[tokio::test]
    async fn test_show_person_by_id_consults_registry() {
        let mut registry = MockPersonRegistry::new();
        registry.expect_exists().returning(|id| Ok(id == 8));
        let state = AppState::new(Arc::new(registry), ApiConfig::default());

        let Json(found) = show_person_by_id(
            State(state.clone()),
            ValidatedPath(PersonIdPath { person_id: 8 }),
        )
        .await
        .unwrap();
        assert_eq!(found.person_id, 8);
        assert_eq!(found.message, PERSON_EXISTS_MESSAGE);

        let err = show_person_by_id(State(state), ValidatedPath(PersonIdPath { person_id: 9 }))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref entity) if entity == "Person 9"));
    }
}
