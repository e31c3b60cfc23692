use axum_helpers::validation::{into_result, require_non_blank, require_present};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Borrower snapshot as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(input: CreateUser) -> Self {
        Self {
            id: 0,
            username: input.username,
            first_name: input.first_name,
            last_name: input.last_name,
            phone: input.phone,
            department: input.department,
            role: input.role,
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
        }
    }

    /// Full replace of the profile fields. `username` cannot change.
    pub fn with_update(self, input: UpdateUser) -> Self {
        Self {
            first_name: input.first_name,
            last_name: input.last_name,
            phone: input.phone,
            department: input.department,
            role: input.role,
            ..self
        }
    }

    pub fn mark_deleted(self, at: DateTime<Utc>) -> Self {
        Self {
            deleted_at: Some(at),
            ..self
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Request body for `POST /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[serde(default)]
    #[schema(example = "admin1")]
    pub username: String,
    #[serde(default)]
    #[schema(example = "John")]
    pub first_name: String,
    #[serde(default)]
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "1234567890")]
    pub phone: Option<String>,
    #[schema(example = "Engineering")]
    pub department: Option<String>,
    #[serde(default)]
    #[schema(example = "admin")]
    pub role: String,
}

impl Validate for CreateUser {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require_non_blank(&mut errors, "username", &self.username);
        require_non_blank(&mut errors, "firstName", &self.first_name);
        require_non_blank(&mut errors, "lastName", &self.last_name);
        require_non_blank(&mut errors, "role", &self.role);
        into_result(errors)
    }
}

/// Request body for `PUT /api/users/{id}`; `phone` is mandatory here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(default)]
    #[schema(example = "John")]
    pub first_name: String,
    #[serde(default)]
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(value_type = String, example = "1234567890")]
    pub phone: Option<String>,
    #[schema(example = "Engineering")]
    pub department: Option<String>,
    #[serde(default)]
    #[schema(example = "admin")]
    pub role: String,
}

impl Validate for UpdateUser {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require_non_blank(&mut errors, "firstName", &self.first_name);
        require_non_blank(&mut errors, "lastName", &self.last_name);
        require_present(&mut errors, "phone", self.phone.as_deref());
        require_non_blank(&mut errors, "role", &self.role);
        into_result(errors)
    }
}
