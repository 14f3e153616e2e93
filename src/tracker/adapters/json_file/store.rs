//! Dataset store backed by a single JSON file.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::{self, Write};
use tracing::{debug, warn};

use super::codec;
use crate::tracker::{
    domain::Dataset,
    ports::{DatasetStore, StoreError, StoreResult},
};

/// Dataset store that keeps the whole dataset in one JSON document.
///
/// The parent directory is opened once as a capability handle and every
/// file operation goes through it. Saves write a sibling temporary file,
/// sync it, and rename it over the document, so an interrupted save leaves
/// either the previous or the new content in place.
///
/// There is no file locking. Two processes saving the same document race
/// and the later save wins.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: Dir,
    path: Utf8PathBuf,
    file_name: String,
}

impl JsonFileStore {
    /// Opens a store for the document at `path`, creating its parent
    /// directory when missing. The document itself is not touched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when `path` does not name a file or the
    /// parent directory cannot be created or opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> StoreResult<Self> {
        let document = path.as_ref();
        let file_name = document
            .file_name()
            .ok_or_else(|| {
                StoreError::io(
                    document.as_str(),
                    io::Error::new(io::ErrorKind::InvalidInput, "store path must name a file"),
                )
            })?
            .to_owned();
        let parent = document
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));

        Dir::create_ambient_dir_all(parent, ambient_authority())
            .map_err(|err| StoreError::io(parent.as_str(), err))?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|err| StoreError::io(parent.as_str(), err))?;

        Ok(Self {
            dir,
            path: document.to_owned(),
            file_name,
        })
    }

    /// Returns the path of the JSON document.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn temp_name(&self) -> String {
        format!(".{}.{}.tmp", self.file_name, std::process::id())
    }

    fn write_replacing(&self, contents: &[u8]) -> io::Result<()> {
        let temp_name = self.temp_name();
        let written = self
            .write_temp(&temp_name, contents)
            .and_then(|()| self.dir.rename(&temp_name, &self.dir, &self.file_name));
        if written.is_err()
            && self.dir.exists(&temp_name)
            && let Err(cleanup) = self.dir.remove_file(&temp_name)
        {
            warn!(path = %self.path, error = %cleanup, "failed to remove temporary store file");
        }
        written
    }

    fn write_temp(&self, temp_name: &str, contents: &[u8]) -> io::Result<()> {
        let mut file = self.dir.create(temp_name)?;
        file.write_all(contents)?;
        file.sync_all()
    }
}

impl DatasetStore for JsonFileStore {
    fn ensure_initialized(&self) -> StoreResult<()> {
        if self.dir.exists(&self.file_name) {
            return Ok(());
        }
        debug!(path = %self.path, "creating empty task store");
        self.save(&Dataset::new())
    }

    fn load(&self) -> StoreResult<Dataset> {
        let contents = self
            .dir
            .read_to_string(&self.file_name)
            .map_err(|err| StoreError::io(self.location(), err))?;
        let dataset =
            codec::decode(&contents).map_err(|err| StoreError::corrupt(self.location(), err))?;
        debug!(
            path = %self.path,
            projects = dataset.projects().len(),
            tasks = dataset.tasks().len(),
            "loaded task store"
        );
        Ok(dataset)
    }

    fn save(&self, dataset: &Dataset) -> StoreResult<()> {
        let contents = codec::encode(dataset).map_err(|err| StoreError::Encode {
            location: self.location(),
            reason: err.to_string(),
        })?;
        self.write_replacing(&contents)
            .map_err(|err| StoreError::io(self.location(), err))?;
        debug!(
            path = %self.path,
            projects = dataset.projects().len(),
            tasks = dataset.tasks().len(),
            "saved task store"
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.to_string()
    }
}
