//! Public JSON projection of a [`Material`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Material;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Material A")]
    pub name: String,
    #[schema(example = "Description for Material A")]
    pub description: Option<String>,
    #[schema(example = 100)]
    pub quantity: i32,
    #[schema(example = "pcs")]
    pub unit: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Material> for MaterialResponse {
    fn from(material: Material) -> Self {
        Self {
            id: material.id,
            name: material.name,
            description: material.description,
            quantity: material.quantity,
            unit: material.unit,
            created_at: material.created_at,
            updated_at: material.updated_at,
            deleted_at: material.deleted_at,
        }
    }
}
