//! Slot conflict check
//!
//! Advisory only: an exact (date, time) match against events that still
//! hold their slot. Never blocks intake; the flag rides along on the
//! chef notification so a human decides.

use crate::db::repository::ChefEventRepository;
use crate::utils::AppResult;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct ConflictChecker {
    events: ChefEventRepository,
}

impl ConflictChecker {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            events: ChefEventRepository::new(db),
        }
    }

    /// True iff a pending or confirmed event already occupies exactly
    /// this (date, time). One minute apart is no conflict.
    pub async fn has_conflict(&self, date: &str, time: &str) -> AppResult<bool> {
        let count = self.events.count_slot_holders(date, time).await?;
        Ok(count > 0)
    }
}
