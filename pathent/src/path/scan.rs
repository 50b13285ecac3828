//! One-level directory listing.

use std::fs::ReadDir;
use std::path::PathBuf;

use super::entity::PathEntity;
use super::normalize::CaseSensitivity;
use super::traverse::open_dir;
use crate::error::{Error, Result};

/// Lazy iterator over the direct children of a directory.
///
/// Created by [`PathEntity::scan`]. Every entry is yielded, whatever its
/// type. The directory handle is closed when the iterator is exhausted,
/// fails, or is dropped.
#[derive(Debug)]
pub struct ScanChildren {
    entries: Option<ReadDir>,
    dir: PathBuf,
    case: CaseSensitivity,
}

impl ScanChildren {
    pub(crate) fn open(dir: &PathEntity) -> Result<Self> {
        Ok(Self {
            entries: Some(open_dir(dir)?),
            dir: dir.as_path().to_path_buf(),
            case: dir.case(),
        })
    }

    fn listing_error(&self, err: std::io::Error) -> Error {
        Error::from_io(&self.dir, err)
    }
}

impl Iterator for ScanChildren {
    type Item = Result<PathEntity>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = match self.entries.as_mut()?.next() {
            None => Ok(None),
            Some(Err(e)) => Err(self.listing_error(e)),
            Some(Ok(entry)) => PathEntity::from_path(&entry.path(), self.case).map(Some),
        };

        match result {
            Ok(Some(child)) => Some(Ok(child)),
            Ok(None) => {
                self.entries = None;
                None
            }
            Err(e) => {
                self.entries = None;
                Some(Err(e))
            }
        }
    }
}
