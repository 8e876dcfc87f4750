//! Menu hierarchy payloads
//!
//! A menu owns its courses, a course its dishes, a dish its ingredients.
//! The whole tree is submitted and stored through the menu root.

use serde::{Deserialize, Serialize};

/// Create menu payload (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCreate {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub courses: Vec<CourseInput>,
}

/// Update menu payload (admin)
///
/// `courses`, when present, replaces the embedded tree wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub courses: Option<Vec<CourseInput>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseInput {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub dishes: Vec<DishInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishInput {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<IngredientInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientInput {
    pub name: String,
    /// Optional allergen / sourcing note
    pub note: Option<String>,
}
