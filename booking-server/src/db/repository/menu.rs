//! Menu Repository

use super::{BaseRepository, RepoError, RepoResult, record_id, record_key};
use crate::db::models::{EmbeddedCourse, Menu};
use crate::utils::time::now_millis;
use shared::models::{MenuCreate, MenuUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "menu";

#[derive(Clone)]
pub struct MenuRepository {
    base: BaseRepository,
}

impl MenuRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All menus, alphabetical
    pub async fn find_all(&self) -> RepoResult<Vec<Menu>> {
        let menus: Vec<Menu> = self
            .base
            .db()
            .query("SELECT * FROM menu ORDER BY name")
            .await?
            .take(0)?;
        Ok(menus)
    }

    /// Find menu by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Menu>> {
        let menu: Option<Menu> = self.base.db().select((TABLE, record_key(TABLE, id))).await?;
        Ok(menu)
    }

    /// Create a menu with its embedded course tree
    pub async fn create(&self, data: MenuCreate) -> RepoResult<Menu> {
        let now = now_millis();
        let menu = Menu {
            id: None,
            name: data.name,
            description: data.description,
            courses: data.courses.into_iter().map(EmbeddedCourse::from).collect(),
            created_at: Some(now),
            updated_at: Some(now),
        };

        let created: Option<Menu> = self.base.db().create(TABLE).content(menu).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu".to_string()))
    }

    /// Update a menu; a present `courses` field replaces the whole tree
    pub async fn update(&self, id: &str, data: MenuUpdate) -> RepoResult<Menu> {
        let thing = record_id(TABLE, id);

        let mut set_parts: Vec<&str> = vec!["updated_at = $now"];
        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.description.is_some() {
            set_parts.push("description = $description");
        }
        if data.courses.is_some() {
            set_parts.push("courses = $courses");
        }

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));
        let mut query = self
            .base
            .db()
            .query(&query_str)
            .bind(("thing", thing))
            .bind(("now", now_millis()));

        if let Some(v) = data.name {
            query = query.bind(("name", v));
        }
        if let Some(v) = data.description {
            query = query.bind(("description", v));
        }
        if let Some(v) = data.courses {
            let courses: Vec<EmbeddedCourse> = v.into_iter().map(EmbeddedCourse::from).collect();
            query = query.bind(("courses", serde_json::to_value(&courses).unwrap_or_default()));
        }

        let mut result = query.await?;
        let menus: Vec<Menu> = result.take(0)?;
        menus
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Menu {} not found", id)))
    }

    /// Hard delete
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<Menu> = self.base.db().delete((TABLE, record_key(TABLE, id))).await?;
        Ok(deleted.is_some())
    }
}
