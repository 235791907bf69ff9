//! # Storage Layer
//!
//! The whole user collection lives in one JSON document. The [`UserStore`] trait reads
//! and writes that document in full; there are no partial updates and no indexes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON array in a single file
//!   (`data.json` by default), pretty-printed with 2-space indentation.
//! - [`memory::InMemoryStore`]: For tests. Can simulate read and write failures.
//! - [`deadline::ReadDeadline`]: Wraps another store and bounds its reads in time.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "id": "5d0b8c1e-…",
//!     "username": "alice",
//!     "email": "alice@example.com",
//!     "role": "admin",
//!     "status": "active"
//!   }
//! ]
//! ```
//!
//! ## Concurrent Writers
//!
//! Nothing coordinates independent writers. Two processes that load, change and save
//! the collection at the same time race, and the last save wins: the other change is
//! silently lost. This is an accepted limitation of the whole-document model.

use crate::error::StoreError;
use crate::model::User;
use async_trait::async_trait;

pub mod deadline;
pub mod fs;
pub mod memory;

/// Whole-collection persistence.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Read the entire collection.
    async fn load(&self) -> Result<Vec<User>, StoreError>;

    /// Replace the entire collection. The previous contents are not kept.
    async fn save(&self, users: &[User]) -> Result<(), StoreError>;
}
