use super::UserStore;
use crate::error::StoreError;
use crate::model::User;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    simulate_read_error: AtomicBool,
    simulate_write_error: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
            ..Self::default()
        }
    }

    /// Make every subsequent `load` fail.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.store(simulate, Ordering::SeqCst);
    }

    /// Make every subsequent `save` fail without touching the stored collection.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Current contents, bypassing failure simulation.
    pub async fn snapshot(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn load(&self) -> Result<Vec<User>, StoreError> {
        if self.simulate_read_error.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("Simulated read error".to_string()));
        }
        Ok(self.users.read().await.clone())
    }

    async fn save(&self, users: &[User]) -> Result<(), StoreError> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("Simulated write error".to_string()));
        }
        *self.users.write().await = users.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{NewUser, Role, Status, UserId};
    use std::time::Duration;

    /// A user with a predictable id and an email derived from the username.
    pub fn user(id: &str, username: &str, role: Role, status: Status) -> User {
        User::from_new(
            UserId::from(id),
            NewUser::new(username, format!("{}@example.com", username.to_lowercase()))
                .with_role(role)
                .with_status(status),
        )
    }

    /// Three users in display order: carol (newest), alice, Bob.
    pub fn sample_users() -> Vec<User> {
        vec![
            user("u-3", "carol", Role::Editor, Status::Inactive),
            user("u-1", "alice", Role::Admin, Status::Active),
            user("u-2", "Bob", Role::User, Status::Banned),
        ]
    }

    pub fn sample_store() -> InMemoryStore {
        InMemoryStore::with_users(sample_users())
    }

    /// A store whose reads and writes never complete.
    pub struct StalledStore;

    #[async_trait]
    impl UserStore for StalledStore {
        async fn load(&self) -> Result<Vec<User>, StoreError> {
            std::future::pending().await
        }

        async fn save(&self, _users: &[User]) -> Result<(), StoreError> {
            std::future::pending().await
        }
    }

    /// Reads immediately, but takes `delay` before every write lands.
    pub struct SlowSaveStore {
        pub inner: InMemoryStore,
        pub delay: Duration,
    }

    impl SlowSaveStore {
        pub fn new(inner: InMemoryStore, delay: Duration) -> Self {
            Self { inner, delay }
        }
    }

    #[async_trait]
    impl UserStore for SlowSaveStore {
        async fn load(&self) -> Result<Vec<User>, StoreError> {
            self.inner.load().await
        }

        async fn save(&self, users: &[User]) -> Result<(), StoreError> {
            tokio::time::sleep(self.delay).await;
            self.inner.save(users).await
        }
    }
}
