//! Filesystem blockstore.
//!
//! Blobs live under `<root>/objects/<aa>/<rest-of-hex>`, sharded by the first
//! hex byte of the identifier so no single directory grows unbounded. Writes
//! go to a temporary file in the same directory and are renamed into place,
//! so a crash mid-write never leaves a partial object at its final path.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use roadline_types::Cid;

use crate::error::{StoreError, StoreResult};
use crate::traits::BlobStore;

/// Persistent filesystem-backed blob store.
pub struct FsBlobStore {
    objects_dir: PathBuf,
}

impl FsBlobStore {
    /// Open (or create) a blockstore rooted at `root`.
    pub fn open(root: impl AsRef<Path>) -> StoreResult<Self> {
        let objects_dir = root.as_ref().join("objects");
        fs::create_dir_all(&objects_dir)?;
        Ok(Self { objects_dir })
    }

    /// Final path of the object file for `id`.
    fn object_path(&self, id: &Cid) -> PathBuf {
        let hex = id.to_hex();
        self.objects_dir.join(&hex[..2]).join(&hex[2..])
    }
}

impl BlobStore for FsBlobStore {
    fn put(&self, data: &[u8]) -> StoreResult<Cid> {
        let id = Cid::for_content(data);
        let path = self.object_path(&id);

        // Idempotent: an existing object already holds these exact bytes.
        if path.exists() {
            return Ok(id);
        }

        let shard_dir = path.parent().expect("object path has a shard directory");
        fs::create_dir_all(shard_dir)?;

        // Write-then-rename. Concurrent writers of the same content race
        // benignly: both temp files hold identical bytes.
        let tmp_path = path.with_extension("tmp");
        {
            let mut tmp = fs::File::create(&tmp_path)?;
            tmp.write_all(data)?;
            tmp.sync_all()?;
        }
        fs::rename(&tmp_path, &path)?;

        Ok(id)
    }

    fn get(&self, id: &Cid) -> StoreResult<Option<Vec<u8>>> {
        let path = self.object_path(id);
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if !id.verifies(&data) {
            return Err(StoreError::HashMismatch {
                id: *id,
                computed: Cid::for_content(&data).to_hex(),
            });
        }

        Ok(Some(data))
    }

    fn exists(&self, id: &Cid) -> StoreResult<bool> {
        Ok(self.object_path(id).exists())
    }

    fn delete(&self, id: &Cid) -> StoreResult<bool> {
        match fs::remove_file(self.object_path(id)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl std::fmt::Debug for FsBlobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsBlobStore")
            .field("objects_dir", &self.objects_dir)
            .finish()
    }
}
