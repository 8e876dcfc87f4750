//! Menu read cache
//!
//! The public catalog is read-mostly; store endpoints serve menus from
//! this in-process TTL cache instead of hitting the database on every
//! request. Admin mutations invalidate the whole thing.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::db::models::Menu;
use crate::db::repository::MenuRepository;
use crate::utils::AppResult;

pub struct MenuCache {
    ttl: Duration,
    list: Mutex<Option<(Instant, Vec<Menu>)>>,
    by_id: DashMap<String, (Instant, Menu)>,
}

impl MenuCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            list: Mutex::new(None),
            by_id: DashMap::new(),
        }
    }

    /// All menus, cached
    pub async fn list(&self, repo: &MenuRepository) -> AppResult<Vec<Menu>> {
        {
            let cached = self.list.lock().unwrap();
            if let Some((at, menus)) = cached.as_ref()
                && at.elapsed() < self.ttl
            {
                return Ok(menus.clone());
            }
        }

        let menus = repo.find_all().await?;
        *self.list.lock().unwrap() = Some((Instant::now(), menus.clone()));
        Ok(menus)
    }

    /// One menu, cached
    pub async fn get(&self, repo: &MenuRepository, id: &str) -> AppResult<Option<Menu>> {
        if let Some(entry) = self.by_id.get(id)
            && entry.0.elapsed() < self.ttl
        {
            return Ok(Some(entry.1.clone()));
        }

        let menu = repo.find_by_id(id).await?;
        if let Some(menu) = &menu {
            self.by_id
                .insert(id.to_string(), (Instant::now(), menu.clone()));
        }
        Ok(menu)
    }

    /// Drop everything; called after any admin mutation
    pub fn invalidate(&self) {
        *self.list.lock().unwrap() = None;
        self.by_id.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidate_clears_both_layers() {
        let cache = MenuCache::new(Duration::from_secs(60));
        *cache.list.lock().unwrap() = Some((Instant::now(), Vec::new()));
        cache.by_id.insert(
            "menu:m1".to_string(),
            (
                Instant::now(),
                Menu {
                    id: None,
                    name: "Test".to_string(),
                    description: None,
                    courses: Vec::new(),
                    created_at: None,
                    updated_at: None,
                },
            ),
        );
        cache.invalidate();
        assert!(cache.list.lock().unwrap().is_none());
        assert!(cache.by_id.is_empty());
    }
}
