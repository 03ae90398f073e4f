//! File-backed durable session marker.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::warn;

use funnel_core::gateways::MarkerStore;

pub struct FileMarkerStore {
    path: PathBuf,
}

impl FileMarkerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MarkerStore for FileMarkerStore {
    fn get(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let uid = contents.trim();
                if uid.is_empty() {
                    None
                } else {
                    Some(uid.to_string())
                }
            }
            // A missing or unreadable marker reads as "not logged in".
            Err(_) => None,
        }
    }

    fn put(&self, uid: &str) {
        if let Err(e) = fs::write(&self.path, uid) {
            warn!("Failed to persist session marker: {}", e);
        }
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != ErrorKind::NotFound {
                warn!("Failed to erase session marker: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_marker() -> FileMarkerStore {
        let path = std::env::temp_dir().join(format!("funnel-marker-{}", Uuid::new_v4()));
        FileMarkerStore::new(path)
    }

    #[test]
    fn test_round_trip() {
        let marker = temp_marker();
        assert!(marker.get().is_none());

        marker.put("uid-1");
        assert_eq!(marker.get().as_deref(), Some("uid-1"));

        marker.clear();
        assert!(marker.get().is_none());
    }

    #[test]
    fn test_clear_without_marker_is_quiet() {
        let marker = temp_marker();
        marker.clear();
        assert!(marker.get().is_none());
    }

    #[test]
    fn test_whitespace_marker_reads_as_absent() {
        let marker = temp_marker();
        fs::write(&marker.path, "  \n").unwrap();
        assert!(marker.get().is_none());
        marker.clear();
    }
}
