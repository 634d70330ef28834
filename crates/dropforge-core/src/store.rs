use crate::error::ForgeResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const MAPS_FILE: &str = "maps.json";
pub const RUNS_FILE: &str = "runs.json";
pub const CHARACTERS_FILE: &str = "characters.json";

/// Flat JSON files under one data directory.
///
/// Every write rewrites the whole file. There is no locking: concurrent
/// read-modify-write sequences are last-write-wins.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    /// Reads and parses `file`. A missing file is `Ok(None)`.
    pub fn read<T: DeserializeOwned>(&self, file: &str) -> ForgeResult<Option<T>> {
        let path = self.path_of(file);
        if !path.exists() {
            debug!("{:?} does not exist yet", path);
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Reads a JSON array, treating a missing file as empty.
    pub fn read_list<T: DeserializeOwned>(&self, file: &str) -> ForgeResult<Vec<T>> {
        Ok(self.read(file)?.unwrap_or_default())
    }

    /// Pretty-prints `data` into `file`, creating the data directory on demand.
    pub fn write<T: Serialize + ?Sized>(&self, file: &str, data: &T) -> ForgeResult<()> {
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string_pretty(data)?;
        fs::write(self.path_of(file), json)?;
        debug!("wrote {}", file);
        Ok(())
    }
}
