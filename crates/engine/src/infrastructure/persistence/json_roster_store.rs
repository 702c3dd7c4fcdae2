//! JSON file roster store
//!
//! The whole roster lives in one pretty-printed JSON array (4-space indent).
//! Saves go to a sibling `.tmp` file which is then renamed over the target,
//! so a crash mid-write leaves the previous roster intact.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use guildhall_domain::Adventurer;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::infrastructure::ports::{RepoError, RosterStore};

const INDENT: &[u8] = b"    ";

pub struct JsonRosterStore {
    path: PathBuf,
}

impl JsonRosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl RosterStore for JsonRosterStore {
    async fn load(&self) -> Result<Vec<Adventurer>, RepoError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Roster file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(RepoError::io("read roster", e)),
        };

        decode_roster(&bytes)
    }

    async fn save(&self, adventurers: &[Adventurer]) -> Result<(), RepoError> {
        let data = encode_roster(adventurers)?;
        let temp_path = self.temp_path();

        tokio::fs::write(&temp_path, &data)
            .await
            .map_err(|e| RepoError::io("write roster", e))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| RepoError::io("replace roster", e))?;

        tracing::debug!(
            path = %self.path.display(),
            count = adventurers.len(),
            "Roster saved"
        );
        Ok(())
    }
}

/// A JSON `null` document is read as an empty roster.
fn decode_roster(bytes: &[u8]) -> Result<Vec<Adventurer>, RepoError> {
    let adventurers: Option<Vec<Adventurer>> =
        serde_json::from_slice(bytes).map_err(RepoError::serialization)?;
    Ok(adventurers.unwrap_or_default())
}

fn encode_roster(adventurers: &[Adventurer]) -> Result<Vec<u8>, RepoError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    adventurers
        .serialize(&mut serializer)
        .map_err(RepoError::serialization)?;
    Ok(buf)
}
