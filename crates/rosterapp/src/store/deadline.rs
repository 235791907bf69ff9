use super::UserStore;
use crate::error::StoreError;
use crate::model::User;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Bounds `load` on the wrapped store; `save` always runs to completion.
///
/// A load that is cut short has changed nothing, so reporting it as a failure is
/// exact. A save that is cut short may still land on disk, so it is never bounded.
pub struct ReadDeadline<S: UserStore> {
    inner: Arc<S>,
    timeout: Duration,
}

impl<S: UserStore> ReadDeadline<S> {
    pub fn new(inner: Arc<S>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<S: UserStore> UserStore for ReadDeadline<S> {
    async fn load(&self) -> Result<Vec<User>, StoreError> {
        match tokio::time::timeout(self.timeout, self.inner.load()).await {
            Ok(loaded) => loaded,
            Err(_) => Err(StoreError::TimedOut(self.timeout)),
        }
    }

    async fn save(&self, users: &[User]) -> Result<(), StoreError> {
        self.inner.save(users).await
    }
}
