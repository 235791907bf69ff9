//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Bounds** every read of the store with the configured timeout
//! - **Converts** store failures and timeouts into [`RosterError::OperationFailed`], after
//!   logging the underlying cause
//!
//! Callers therefore cannot tell a read failure from a write failure, and must not try:
//! any failed mutation means "revert and tell the user".
//!
//! ## Writes Are Never Abandoned
//!
//! Each command runs on its own task. Only its reads are bounded in time, so once a save
//! has started the operation reports whatever that save did. A reported failure never
//! hides a change that reached the store, and dropping the returned future does not
//! interrupt a write in progress.
//!
//! ## Generic Over UserStore
//!
//! `RosterApi<S: UserStore>` is generic over the storage backend:
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands::{self, CmdResult};
use crate::error::{Operation, Result, RosterError, StoreError};
use crate::model::{NewUser, UserId};
use crate::store::deadline::ReadDeadline;
use crate::store::UserStore;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

pub use crate::commands::{CmdMessage, MessageLevel};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// The main API facade for roster operations.
pub struct RosterApi<S: UserStore> {
    store: Arc<S>,
    timeout: Duration,
}

impl<S: UserStore> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read path used for the initial render and for every full refresh.
    pub async fn list_users(&self) -> Result<CmdResult> {
        self.guarded(Operation::List, |store| async move {
            commands::list::run(&store).await
        })
        .await
    }

    /// Persists a new user. The created record, with its generated id, is returned in
    /// `affected_users`.
    pub async fn add_user(&self, new_user: NewUser) -> Result<CmdResult> {
        let username = new_user.username.clone();
        let result = self
            .guarded(Operation::Add, |store| async move {
                commands::add::run(&store, new_user).await
            })
            .await?;
        tracing::info!(%username, "user added");
        Ok(result)
    }

    pub async fn delete_user(&self, id: &UserId) -> Result<CmdResult> {
        let target = id.clone();
        let result = self
            .guarded(Operation::Delete, |store| async move {
                commands::delete::run(&store, &target).await
            })
            .await?;
        tracing::info!(%id, removed = !result.affected_users.is_empty(), "user deleted");
        Ok(result)
    }

    async fn guarded<F, Fut>(&self, operation: Operation, command: F) -> Result<CmdResult>
    where
        F: FnOnce(ReadDeadline<S>) -> Fut,
        Fut: Future<Output = Result<CmdResult>> + Send + 'static,
    {
        let store = ReadDeadline::new(Arc::clone(&self.store), self.timeout);
        let outcome = match tokio::spawn(command(store)).await {
            Ok(outcome) => outcome,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => Err(RosterError::Store(StoreError::Unavailable(e.to_string()))),
        };

        match outcome {
            Err(RosterError::Store(e)) => {
                tracing::error!(%operation, error = %e, "store failure");
                Err(RosterError::operation_failed(operation, e))
            }
            other => other,
        }
    }
}
