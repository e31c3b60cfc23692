use axum_helpers::validation::{into_result, require_min, require_non_blank};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Material snapshot as stored.
///
/// `id` is `0` until the store assigns one. A material with `deleted_at`
/// set is invisible to every read.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub unit: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Material {
    /// Unsaved material built from a validated create request.
    pub fn new(input: CreateMaterial) -> Self {
        Self {
            id: 0,
            name: input.name,
            description: input.description,
            quantity: input.quantity,
            unit: input.unit,
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
        }
    }

    /// Full replace of the mutable fields; identity and creation time are kept.
    pub fn with_update(self, input: UpdateMaterial) -> Self {
        Self {
            name: input.name,
            description: input.description,
            quantity: input.quantity,
            unit: input.unit,
            ..self
        }
    }

    /// Marks the snapshot as deleted at `at`.
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

/// Request body for `POST /api/materials`.
///
/// Missing `name`/`unit` deserialize as empty so they surface as a
/// `required` violation on the field instead of a body parse error.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterial {
    #[serde(default)]
    #[schema(example = "Material A")]
    pub name: String,
    #[schema(example = "Description for Material A")]
    pub description: Option<String>,
    #[schema(minimum = 0, example = 100)]
    pub quantity: i32,
    #[serde(default)]
    #[schema(example = "pcs")]
    pub unit: String,
}

impl Validate for CreateMaterial {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require_non_blank(&mut errors, "name", &self.name);
        require_min(&mut errors, "quantity", i64::from(self.quantity), 0);
        require_non_blank(&mut errors, "unit", &self.unit);
        into_result(errors)
    }
}

/// Request body for `PUT /api/materials/{id}`; replaces every mutable field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaterial {
    #[serde(default)]
    #[schema(example = "Material A")]
    pub name: String,
    pub description: Option<String>,
    #[schema(minimum = 0, example = 80)]
    pub quantity: i32,
    #[serde(default)]
    #[schema(example = "pcs")]
    pub unit: String,
}

impl Validate for UpdateMaterial {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require_non_blank(&mut errors, "name", &self.name);
        require_min(&mut errors, "quantity", i64::from(self.quantity), 0);
        require_non_blank(&mut errors, "unit", &self.unit);
        into_result(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::validation::violations;

    fn create(name: &str, quantity: i32, unit: &str) -> CreateMaterial {
        CreateMaterial {
            name: name.to_string(),
            description: None,
            quantity,
            unit: unit.to_string(),
        }
    }

    #[test]
    fn test_valid_create_passes() {
        assert!(create("Material A", 0, "pcs").validate().is_ok());
    }

    #[test]
    fn test_negative_quantity_is_reported_on_quantity() {
        let errors = create("Material A", -1, "pcs").validate().unwrap_err();
        let found = violations(&errors);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].field, "quantity");
        assert_eq!(found[0].constraint, "min");
    }

    #[test]
    fn test_blank_fields_are_all_reported() {
        let errors = create(" ", -3, "").validate().unwrap_err();
        let fields: Vec<_> = violations(&errors).into_iter().map(|v| v.field).collect();

        assert_eq!(fields, vec!["name", "quantity", "unit"]);
    }

    #[test]
    fn test_missing_strings_deserialize_as_blank() {
        let input: CreateMaterial = serde_json::from_str(r#"{"quantity": 5}"#).unwrap();
        assert_eq!(input.name, "");
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_with_update_keeps_identity() {
        let mut material = Material::new(create("Material A", 100, "pcs"));
        material.id = 4;
        let created_at = material.created_at;

        let updated = material.with_update(UpdateMaterial {
            name: "Material A2".to_string(),
            description: Some("restocked".to_string()),
            quantity: 250,
            unit: "box".to_string(),
        });

        assert_eq!(updated.id, 4);
        assert_eq!(updated.created_at, created_at);
        assert_eq!(updated.name, "Material A2");
        assert_eq!(updated.quantity, 250);
        assert!(!updated.is_deleted());
    }
}
