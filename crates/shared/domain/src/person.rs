//! Person schemas and the response-safe projection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use crate::constants::{MAX_AGE, MAX_NAME_LENGTH, MIN_AGE};
use crate::error::{DomainError, DomainResult};
use crate::location::Location;
use crate::password::{validate_password, Password};

/// Accepted hair colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    White,
    Brown,
    Black,
    Blonde,
    Red,
}

/// Fields shared by every person representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PersonBase {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "First name must be between 1 and 50 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Last name must be between 1 and 50 characters"))]
    pub last_name: String,
    #[validate(range(min = MIN_AGE, max = MAX_AGE, message = "Age must be greater than 0 and at most 115"))]
    pub age: i32,
    pub hair_color: Option<HairColor>,
    pub is_married: Option<bool>,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
}

/// Incoming person, including the password.
///
/// The password is accepted only to exercise its validation rules; it is
/// never persisted and every response goes through [`PersonOut`].
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "PersonFields")]
pub struct Person {
    pub profile: PersonBase,
    pub password: Password,
}

/// Flat wire shape of [`Person`].
///
/// Deserializing through this instead of `#[serde(flatten)]` keeps the
/// field name attached to type errors and missing fields.
#[derive(Deserialize)]
struct PersonFields {
    first_name: String,
    last_name: String,
    age: i32,
    hair_color: Option<HairColor>,
    is_married: Option<bool>,
    email: Option<String>,
    website: Option<String>,
    password: Password,
}

impl From<PersonFields> for Person {
    fn from(fields: PersonFields) -> Self {
        Self {
            profile: PersonBase {
                first_name: fields.first_name,
                last_name: fields.last_name,
                age: fields.age,
                hair_color: fields.hair_color,
                is_married: fields.is_married,
                email: fields.email,
                website: fields.website,
            },
            password: fields.password,
        }
    }
}

// Profile errors are reported at the top level because the wire format
// is flat.
impl Validate for Person {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.profile.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if let Err(error) = validate_password(&self.password) {
            errors.add("password", error);
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Person as returned to clients, without the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonOut {
    #[serde(flatten)]
    pub profile: PersonBase,
}

impl From<Person> for PersonOut {
    fn from(person: Person) -> Self {
        Self {
            profile: person.profile,
        }
    }
}

impl PersonOut {
    /// Merge this person and a location into one flat mapping.
    ///
    /// Location values win when a key appears in both.
    pub fn merge_location(&self, location: &Location) -> DomainResult<Map<String, Value>> {
        let mut merged = into_object(self)?;
        merged.extend(into_object(location)?);
        Ok(merged)
    }
}

fn into_object<T: Serialize>(value: &T) -> DomainResult<Map<String, Value>> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(DomainError::internal(format!(
            "expected an object, got {}",
            other
        ))),
        Err(e) => Err(DomainError::internal(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> PersonBase {
        PersonBase {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            age: 36,
            hair_color: Some(HairColor::Brown),
            is_married: Some(true),
            email: Some("ada@example.com".to_string()),
            website: Some("https://example.com/ada".to_string()),
        }
    }

    fn person(password: &str) -> Person {
        Person {
            profile: profile(),
            password: Password::new(password),
        }
    }

    #[test]
    fn test_valid_person() {
        assert!(person("analytical-engine").validate().is_ok());
    }

    #[test]
    fn test_age_bounds() {
        for age in [MIN_AGE - 1, -1, MAX_AGE + 1] {
            let mut p = person("analytical-engine");
            p.profile.age = age;
            let errors = p.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("age"), "age {} accepted", age);
        }

        for age in [MIN_AGE, MAX_AGE] {
            let mut p = person("analytical-engine");
            p.profile.age = age;
            assert!(p.validate().is_ok(), "age {} rejected", age);
        }
    }

    #[test]
    fn test_profile_and_password_errors_are_collected_together() {
        let mut p = person("short");
        p.profile.first_name = String::new();

        let errors = p.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_last_name_length_bound() {
        let mut p = person("analytical-engine");
        p.profile.last_name = "x".repeat(MAX_NAME_LENGTH as usize);
        assert!(p.validate().is_ok());

        p.profile.last_name.push('x');
        let errors = p.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("last_name"));
    }

    #[test]
    fn test_invalid_email_and_url_rejected() {
        let mut p = person("analytical-engine");
        p.profile.email = Some("not-an-email".to_string());
        p.profile.website = Some("not a url".to_string());

        let errors = p.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("website"));
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let json = r#"{"first_name":"Ada","last_name":"Lovelace","age":36,"password":"analytical-engine"}"#;
        let p: Person = serde_json::from_str(json).unwrap();

        assert!(p.profile.hair_color.is_none());
        assert!(p.profile.email.is_none());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_unknown_hair_color_fails_to_deserialize() {
        let json = r#"{"first_name":"Ada","last_name":"Lovelace","age":36,"hair_color":"purple","password":"analytical-engine"}"#;
        assert!(serde_json::from_str::<Person>(json).is_err());
    }

    #[test]
    fn test_person_out_drops_password() {
        let out = PersonOut::from(person("analytical-engine"));
        let value = serde_json::to_value(&out).unwrap();

        assert!(value.get("password").is_none());
        assert_eq!(value["first_name"], "Ada");
        assert_eq!(value["hair_color"], "brown");
    }

    #[test]
    fn test_merge_location_is_union_of_fields() {
        let out = PersonOut::from(person("analytical-engine"));
        let location = Location {
            city: "London".to_string(),
            state: "England".to_string(),
            country: "UK".to_string(),
        };

        let merged = out.merge_location(&location).unwrap();
        assert_eq!(merged["first_name"], "Ada");
        assert_eq!(merged["city"], "London");
        assert_eq!(merged["country"], "UK");
        assert!(!merged.contains_key("password"));
        // 7 person fields + 3 location fields
        assert_eq!(merged.len(), 10);
    }

    #[test]
    fn test_hair_color_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_value(HairColor::Red).unwrap(), "red");
        let color: HairColor = serde_json::from_str("\"blonde\"").unwrap();
        assert_eq!(color, HairColor::Blonde);
    }

    #[test]
    fn test_missing_field_keeps_its_name() {
        let json = r#"{"first_name":"Ada","last_name":"Lovelace","password":"analytical-engine"}"#;
        let err = serde_json::from_str::<Person>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `age`"));
    }
}
