//! # nq-store-json
//! Local filesystem implementation of `StateStore`.
//!
//! Each logical record lives in its own pretty-printed JSON file under the
//! data directory: `user.json`, `properties.json`, `requests.json`. Every
//! save overwrites the whole file; there is no coordination between the
//! three records and no conflict resolution across processes — last writer
//! wins, exactly like the browser storage it replaces.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;
use tracing::warn;

use nq_core::models::{Property, RentalRequest, User};
use nq_core::traits::StateStore;

const USER_KEY: &str = "user";
const PROPERTIES_KEY: &str = "properties";
const REQUESTS_KEY: &str = "requests";

pub struct JsonStateStore {
    /// Root directory for all state files (e.g. "./data")
    root_path: PathBuf,
}

impl JsonStateStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root_path: root }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root_path.join(format!("{key}.json"))
    }

    /// Reads one record. An absent file is `None`; an unreadable or corrupt
    /// file is logged and also treated as `None`, so the caller falls back
    /// to its default instead of crashing.
    async fn load_key<T: DeserializeOwned>(&self, key: &str) -> anyhow::Result<Option<T>> {
        let path = self.key_path(key);
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(key, %err, "state file is corrupt, treating record as absent");
                Ok(None)
            }
        }
    }

    /// Overwrites one record in full.
    async fn save_key<T: Serialize>(&self, key: &str, value: &T) -> anyhow::Result<()> {
        fs::create_dir_all(&self.root_path).await?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.key_path(key), json).await?;
        Ok(())
    }

    async fn remove_key(&self, key: &str) -> anyhow::Result<()> {
        match fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root_path
    }
}

#[async_trait]
impl StateStore for JsonStateStore {
    async fn load_user(&self) -> anyhow::Result<Option<User>> {
        self.load_key(USER_KEY).await
    }

    async fn save_user(&self, user: &User) -> anyhow::Result<()> {
        self.save_key(USER_KEY, user).await
    }

    async fn clear_user(&self) -> anyhow::Result<()> {
        self.remove_key(USER_KEY).await
    }

    async fn load_properties(&self) -> anyhow::Result<Option<Vec<Property>>> {
        self.load_key(PROPERTIES_KEY).await
    }

    async fn save_properties(&self, properties: &[Property]) -> anyhow::Result<()> {
        self.save_key(PROPERTIES_KEY, &properties).await
    }

    async fn load_requests(&self) -> anyhow::Result<Option<Vec<RentalRequest>>> {
        self.load_key(REQUESTS_KEY).await
    }

    async fn save_requests(&self, requests: &[RentalRequest]) -> anyhow::Result<()> {
        self.save_key(REQUESTS_KEY, &requests).await
    }
}
