use crate::api::RosterApi;
use crate::model::User;
use crate::store::fs::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// A file-backed API rooted in a throwaway directory.
pub struct TestEnv {
    // Held so the directory outlives the test.
    pub _temp_dir: TempDir,
    pub data_file: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    /// No data file is created; use [`TestEnv::with_users`] or `init` for that.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let data_file = temp_dir.path().join("data.json");
        Self {
            _temp_dir: temp_dir,
            data_file,
        }
    }

    pub fn with_users(users: &[User]) -> Self {
        let env = Self::new();
        let content = serde_json::to_string_pretty(users).expect("users serialize");
        std::fs::write(&env.data_file, content).expect("failed to seed data file");
        env
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(&self.data_file)
    }

    pub fn api(&self) -> RosterApi<FileStore> {
        RosterApi::new(self.store())
    }
}
