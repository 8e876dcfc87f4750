//! Chef Event Repository

use super::{BaseRepository, RepoError, RepoResult, record_id, record_key};
use crate::db::models::ChefEvent;
use crate::utils::time::now_millis;
use serde::Deserialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "chef_event";

#[derive(Clone)]
pub struct ChefEventRepository {
    base: BaseRepository,
}

impl ChefEventRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a new event record
    pub async fn create(&self, mut event: ChefEvent) -> RepoResult<ChefEvent> {
        let now = now_millis();
        event.id = None;
        event.created_at = Some(now);
        event.updated_at = Some(now);

        let created: Option<ChefEvent> = self.base.db().create(TABLE).content(event).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create chef event".to_string()))
    }

    /// Find event by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<ChefEvent>> {
        let event: Option<ChefEvent> =
            self.base.db().select((TABLE, record_key(TABLE, id))).await?;
        Ok(event)
    }

    /// All events, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<ChefEvent>> {
        let events: Vec<ChefEvent> = self
            .base
            .db()
            .query("SELECT * FROM chef_event ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(events)
    }

    /// Count events occupying the exact (date, time) slot.
    ///
    /// Only pending and confirmed events hold a slot; the match is exact
    /// string equality on both fields.
    pub async fn count_slot_holders(&self, date: &str, time: &str) -> RepoResult<i64> {
        #[derive(Deserialize)]
        struct CountRow {
            count: i64,
        }

        let rows: Vec<CountRow> = self
            .base
            .db()
            .query(
                "SELECT count() FROM chef_event \
                 WHERE requested_date = $date AND requested_time = $time \
                 AND status IN ['pending', 'confirmed'] GROUP ALL",
            )
            .bind(("date", date.to_string()))
            .bind(("time", time.to_string()))
            .await?
            .take(0)?;
        Ok(rows.first().map(|r| r.count).unwrap_or(0))
    }

    /// Flip the event to confirmed and store the created product
    /// reference ("table:key" string form, matching the stored shape).
    pub async fn confirm(&self, id: &str, product: RecordId) -> RepoResult<ChefEvent> {
        let thing = record_id(TABLE, id);
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $thing SET status = 'confirmed', product = $product, \
                 updated_at = $now RETURN AFTER",
            )
            .bind(("thing", thing))
            .bind(("product", product.to_string()))
            .bind(("now", now_millis()))
            .await?;
        let events: Vec<ChefEvent> = result.take(0)?;
        events
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Chef event {} not found", id)))
    }

    /// Hard delete (admin CRUD, not part of the booking flow)
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<ChefEvent> =
            self.base.db().delete((TABLE, record_key(TABLE, id))).await?;
        Ok(deleted.is_some())
    }
}
