//! SQLite-backed key-value storage standing in for the host's
//! origin-scoped local storage, plus the adapter that keeps the post
//! list as a JSON blob under its fixed key.

use crate::constant::POSTS_STORAGE_KEY;
use crate::post::{now_millis, Post};
use crate::PlazaResult;
use rand::{thread_rng, Rng};
use sqlite::{Connection, State};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const KV_TABLE: &str = "kv";

/// An open storage slot: one SQLite file per profile, one `kv` table,
/// string blobs under string keys.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store at `path`, creating the file and the kv table
    /// as needed.
    pub fn open(path: impl AsRef<Path>) -> PlazaResult<Self> {
        let conn = sqlite::open(path.as_ref())?;
        let store = Store { conn };
        store.setup_tables()?;
        Ok(store)
    }

    /// A store that lives and dies with the process. Used by tests
    /// and throwaway sessions.
    pub fn in_memory() -> PlazaResult<Self> {
        Self::open(":memory:")
    }

    fn setup_tables(&self) -> PlazaResult<()> {
        let statement = format!(
            "
            CREATE TABLE IF NOT EXISTS {KV_TABLE}
            (key TEXT PRIMARY KEY,
            value TEXT NOT NULL);
        "
        );
        self.conn.execute(statement)?;
        Ok(())
    }

    /// Read the blob stored under `key`, if any.
    pub fn get_item(&self, key: &str) -> PlazaResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare(format!("SELECT value FROM {KV_TABLE} WHERE key = ?"))?;
        stmt.bind((1, key))?;

        if let State::Row = stmt.next()? {
            return Ok(Some(stmt.read::<String, _>("value")?));
        }
        Ok(None)
    }

    /// Write `value` under `key`, replacing whatever was there. Whole
    /// value replacement, never a merge. Keys and values are bound as
    /// statement parameters.
    pub fn set_item(&self, key: &str, value: &str) -> PlazaResult<()> {
        let mut stmt = self.conn.prepare(format!(
            "INSERT OR REPLACE INTO {KV_TABLE} (key, value) VALUES (?, ?)"
        ))?;
        stmt.bind((1, key))?;
        stmt.bind((2, value))?;
        stmt.next()?;
        Ok(())
    }

    /// Drop the blob stored under `key`. Removing an absent key is
    /// not an error.
    pub fn remove_item(&self, key: &str) -> PlazaResult<()> {
        let mut stmt = self
            .conn
            .prepare(format!("DELETE FROM {KV_TABLE} WHERE key = ?"))?;
        stmt.bind((1, key))?;
        stmt.next()?;
        Ok(())
    }
}

/// Rehydrate the post list from the store. An absent slot yields the
/// seeded welcome post; a blob that no longer decodes is treated the
/// same way rather than surfacing the decode error.
pub fn load_posts(store: &Store) -> PlazaResult<Vec<Post>> {
    match store.get_item(POSTS_STORAGE_KEY)? {
        Some(blob) => match serde_json::from_str::<Vec<Post>>(&blob) {
            Ok(posts) => Ok(posts),
            Err(err) => {
                warn!(%err, "stored post list is not decodable; reseeding");
                Ok(seed_posts())
            }
        },
        None => Ok(seed_posts()),
    }
}

/// Serialize the full list and overwrite the stored blob.
pub fn save_posts(store: &Store, posts: &[Post]) -> PlazaResult<()> {
    let blob = serde_json::to_string(posts)?;
    store.set_item(POSTS_STORAGE_KEY, &blob)
}

fn seed_posts() -> Vec<Post> {
    vec![Post::seed(now_millis())]
}

pub fn query_table_info(conn: &Connection, table_name: &str) -> PlazaResult<Vec<sqlite::Row>> {
    let statement = format!("PRAGMA table_info({table_name});");

    let mut stmt = conn.prepare(statement)?;

    let result: Vec<sqlite::Row> = stmt.iter().filter_map(|val| val.ok()).collect();

    Ok(result)
}

/// Generates a random store name with four 16-bit fields, such that
/// each random store name is `plaza-xxxxx-xxxxx-xxxxx-xxxxx.db`. The
/// generated digits are padded with zeroes to ensure standardised
/// length of each field.
pub fn generate_random_store_name() -> String {
    let mut buffer = [0u16; 4];
    thread_rng().fill(&mut buffer);
    let mut result = buffer
        .into_iter()
        .map(|val| format!("{:05}", val.to_be()))
        .collect::<Vec<String>>()
        .join("-");
    result.insert_str(0, "plaza-");
    result.push_str(".db");
    result
}

pub fn generate_temp_store() -> PathBuf {
    let random_store_name = generate_random_store_name();
    std::env::temp_dir().join(random_store_name)
}
