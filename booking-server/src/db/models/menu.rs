//! Menu entity: embedded course/dish/ingredient tree

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::models::{CourseInput, DishInput, IngredientInput};
use surrealdb::RecordId;

pub type MenuId = RecordId;

/// Menu entity. Read-mostly template data: the whole hierarchy lives
/// embedded in one record and is replaced wholesale on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<MenuId>,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub courses: Vec<EmbeddedCourse>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedCourse {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub dishes: Vec<EmbeddedDish>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedDish {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<EmbeddedIngredient>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedIngredient {
    pub name: String,
    pub note: Option<String>,
}

impl From<CourseInput> for EmbeddedCourse {
    fn from(input: CourseInput) -> Self {
        Self {
            name: input.name,
            description: input.description,
            dishes: input.dishes.into_iter().map(EmbeddedDish::from).collect(),
        }
    }
}

impl From<DishInput> for EmbeddedDish {
    fn from(input: DishInput) -> Self {
        Self {
            name: input.name,
            description: input.description,
            ingredients: input
                .ingredients
                .into_iter()
                .map(EmbeddedIngredient::from)
                .collect(),
        }
    }
}

impl From<IngredientInput> for EmbeddedIngredient {
    fn from(input: IngredientInput) -> Self {
        Self {
            name: input.name,
            note: input.note,
        }
    }
}
