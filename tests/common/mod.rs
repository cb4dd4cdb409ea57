#![allow(dead_code)]

use std::sync::Arc;
use tempfile::TempDir;
use url_redirector::application::services::RedirectService;
use url_redirector::domain::SystemClock;
use url_redirector::domain::entities::UrlRecord;
use url_redirector::infrastructure::storage::FsObjectStore;
use url_redirector::state::AppState;

pub const BUCKET: &str = "url-shortener-storage-g";

/// Temporary storage root holding one bucket directory.
pub struct TestStore {
    pub dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(BUCKET)).unwrap();
        Self { dir }
    }

    /// Stores a record under `<code>.json`.
    pub fn put_record(&self, code: &str, url: &str, expiration_time: i64) {
        let bytes = serde_json::to_vec(&UrlRecord::new(url, expiration_time)).unwrap();
        self.put_raw(code, &bytes);
    }

    /// Stores arbitrary bytes under `<code>.json`.
    pub fn put_raw(&self, code: &str, bytes: &[u8]) {
        let path = self.dir.path().join(BUCKET).join(format!("{code}.json"));
        std::fs::write(path, bytes).unwrap();
    }

    pub fn state(&self) -> AppState {
        self.state_for_bucket(BUCKET)
    }

    pub fn state_for_bucket(&self, bucket: &str) -> AppState {
        let store = Arc::new(FsObjectStore::new(self.dir.path()));
        let service = RedirectService::new(store, Arc::new(SystemClock), bucket.to_string());
        AppState::new(Arc::new(service))
    }
}

pub fn future_epoch() -> i64 {
    chrono::Utc::now().timestamp() + 86_400
}
