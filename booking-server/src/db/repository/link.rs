//! Link Repository (Graph DB style)
//!
//! Generic loosely-typed associations between records from different
//! modules, stored as `link` edges carrying a `kind` discriminator.
//! These edges are the only join between a chef event and the catalog
//! artifacts acceptance creates for it.

use super::{BaseRepository, RepoResult};
use crate::db::models::serde_helpers;
use serde::Deserialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

/// Link kinds used by the acceptance flow
pub mod kind {
    pub const CHANNEL_LOCATION: &str = "channel_location";
    pub const LOCATION_FULFILLMENT: &str = "location_fulfillment";
    pub const MENU_PRODUCT: &str = "menu_product";
    pub const EVENT_PRODUCT: &str = "event_product";
}

#[derive(Clone)]
pub struct LinkRepository {
    base: BaseRepository,
}

impl LinkRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Relate two records with a kind tag
    pub async fn link(&self, from: RecordId, to: RecordId, kind: &str) -> RepoResult<()> {
        self.base
            .db()
            .query("RELATE $from->link->$to SET kind = $kind")
            .bind(("from", from))
            .bind(("to", to))
            .bind(("kind", kind.to_string()))
            .await?
            .check()?;
        Ok(())
    }

    /// Remove the matching edge(s)
    pub async fn unlink(&self, from: RecordId, to: RecordId, kind: &str) -> RepoResult<()> {
        self.base
            .db()
            .query("DELETE link WHERE in = $from AND out = $to AND kind = $kind")
            .bind(("from", from))
            .bind(("to", to))
            .bind(("kind", kind.to_string()))
            .await?
            .check()?;
        Ok(())
    }

    /// Targets linked from a record under a kind
    pub async fn targets(&self, from: RecordId, kind: &str) -> RepoResult<Vec<RecordId>> {
        #[derive(Deserialize)]
        struct Edge {
            #[serde(with = "serde_helpers::record_id")]
            out: RecordId,
        }

        let edges: Vec<Edge> = self
            .base
            .db()
            .query("SELECT out FROM link WHERE in = $from AND kind = $kind")
            .bind(("from", from))
            .bind(("kind", kind.to_string()))
            .await?
            .take(0)?;
        Ok(edges.into_iter().map(|e| e.out).collect())
    }
}
