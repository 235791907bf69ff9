//! # List View-State
//!
//! [`UserListView`] is a headless state machine for the user list: it owns the working
//! copy of the collection plus the transient search, sort and pending-delete state, and
//! applies optimistic mutations that are rolled back when persistence fails.
//!
//! ## Two-Phase Mutations
//!
//! Every mutation is split into a synchronous `begin_*` step and a `settle_*` step:
//!
//! ```text
//! begin_delete()  ──▶ row removed, snapshot kept in the ticket
//!       │
//!       ▼   api.delete_user(..).await
//! settle_delete() ──▶ Ok: nothing to do │ Err: snapshot restored, error returned
//! ```
//!
//! The optimistic change is visible as soon as `begin_*` returns, before any store call
//! is issued. [`UserListView::confirm_delete`] and [`UserListView::submit_add`] run both
//! phases against a [`RosterApi`].
//!
//! ## One Mutation At A Time
//!
//! A view admits a single outstanding mutation. `begin_*` while another is in flight
//! fails with [`RosterError::MutationInFlight`] and changes nothing.
//!
//! A [`refresh`](UserListView::refresh) replaces the working copy wholesale and
//! invalidates any outstanding ticket: settling it afterwards still reports the outcome
//! but leaves the fresh rows alone.
//!
//! ## Placeholder Rows
//!
//! Rows added optimistically carry [`RowOrigin::Local`] and a client-generated id. The
//! row keeps that id after the add succeeds; the stored record has a different one.
//! Deleting such a row before the next refresh asks the store to delete an id it has
//! never seen, which is a no-op there. The view logs a warning when that happens.

pub mod projection;

use crate::api::RosterApi;
use crate::commands::CmdResult;
use crate::error::{Result, RosterError};
use crate::model::{NewUser, User, UserId};
use crate::selector::UserSelector;
use crate::store::UserStore;
use crate::validation::validate_new_user;
use projection::{project, ProjectedRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortDirection {
    /// `Unsorted → Ascending → Descending → Unsorted`.
    pub fn next(self) -> Self {
        match self {
            SortDirection::Unsorted => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Unsorted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrigin {
    /// Loaded from the store.
    Stored,
    /// Added optimistically by this view; the id is a local placeholder.
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub user: User,
    pub origin: RowOrigin,
}

impl Row {
    fn stored(user: User) -> Self {
        Self {
            user,
            origin: RowOrigin::Stored,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.origin == RowOrigin::Local
    }
}

/// An outstanding delete. Hand it back to [`UserListView::settle_delete`].
#[derive(Debug)]
#[must_use = "a delete ticket must be settled"]
pub struct DeleteTicket {
    target: User,
    snapshot: Vec<Row>,
    generation: u64,
}

/// An outstanding add. Hand it back to [`UserListView::settle_add`].
#[derive(Debug)]
#[must_use = "an add ticket must be settled"]
pub struct AddTicket {
    placeholder: UserId,
    new_user: NewUser,
    generation: u64,
}

impl AddTicket {
    /// The candidate to send to the add operation, without the placeholder id.
    pub fn new_user(&self) -> &NewUser {
        &self.new_user
    }

    pub fn placeholder(&self) -> &UserId {
        &self.placeholder
    }
}

#[derive(Debug, Default)]
pub struct UserListView {
    items: Vec<Row>,
    query: String,
    sort: SortDirection,
    pending_delete: Option<User>,
    in_flight: bool,
    generation: u64,
}

impl UserListView {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            items: users.into_iter().map(Row::stored).collect(),
            ..Self::default()
        }
    }

    /// Loads the collection through the API and builds a view over it.
    pub async fn load<S: UserStore>(api: &RosterApi<S>) -> Result<Self> {
        let result = api.list_users().await?;
        Ok(Self::new(result.listed_users))
    }

    pub fn items(&self) -> &[Row] {
        &self.items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort
    }

    pub fn pending_delete(&self) -> Option<&User> {
        self.pending_delete.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// The rows to display: filtered by the query, then sorted.
    pub fn projection(&self) -> Vec<ProjectedRow<'_>> {
        project(&self.items, &self.query, self.sort)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn cycle_sort(&mut self) -> SortDirection {
        self.sort = self.sort.next();
        self.sort
    }

    /// Finds a row by exact id, then exact username, then position in the unfiltered
    /// list.
    pub fn select(&self, selector: &UserSelector) -> Result<&Row> {
        let key = selector.key();
        self.items
            .iter()
            .find(|row| row.user.id.as_str() == key)
            .or_else(|| self.items.iter().find(|row| row.user.username == key))
            .or_else(|| {
                selector
                    .position()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| self.items.get(i))
            })
            .ok_or_else(|| RosterError::UserNotFound(selector.to_string()))
    }

    pub fn request_delete(&mut self, user: User) {
        self.pending_delete = Some(user);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Removes the pending user from the working copy and returns the ticket for the
    /// store call. The pending selection is cleared whatever the outcome.
    pub fn begin_delete(&mut self) -> Result<DeleteTicket> {
        if self.in_flight {
            return Err(RosterError::MutationInFlight);
        }
        let target = self
            .pending_delete
            .take()
            .ok_or(RosterError::NothingToConfirm)?;

        let snapshot = self.items.clone();
        if let Some(i) = self.items.iter().position(|row| row.user.id == target.id) {
            let row = self.items.remove(i);
            if row.is_placeholder() {
                tracing::warn!(
                    id = %row.user.id,
                    username = %row.user.username,
                    "deleting a row that still has its placeholder id; refresh before deleting to remove the stored record"
                );
            }
        }

        self.in_flight = true;
        Ok(DeleteTicket {
            target,
            snapshot,
            generation: self.generation,
        })
    }

    /// Applies the outcome of the delete call and passes it through. On failure the rows
    /// are restored to the snapshot taken in [`begin_delete`](Self::begin_delete).
    pub fn settle_delete<T>(&mut self, ticket: DeleteTicket, outcome: Result<T>) -> Result<T> {
        let current = ticket.generation == self.generation;
        if current {
            self.in_flight = false;
        }
        match outcome {
            Ok(value) => Ok(value),
            Err(e) => {
                if current {
                    tracing::warn!(username = %ticket.target.username, "delete failed, restoring row");
                    self.items = ticket.snapshot;
                }
                Err(e)
            }
        }
    }

    /// Validates the candidate and prepends it with a local placeholder id.
    pub fn begin_add(&mut self, new_user: NewUser) -> Result<AddTicket> {
        validate_new_user(&new_user)?;
        if self.in_flight {
            return Err(RosterError::MutationInFlight);
        }

        let placeholder = UserId::generate();
        self.items.insert(
            0,
            Row {
                user: User::from_new(placeholder.clone(), new_user.clone()),
                origin: RowOrigin::Local,
            },
        );

        self.in_flight = true;
        Ok(AddTicket {
            placeholder,
            new_user,
            generation: self.generation,
        })
    }

    /// Applies the outcome of the add call and passes it through. On success the
    /// placeholder row stays as it is; on failure it is removed.
    pub fn settle_add<T>(&mut self, ticket: AddTicket, outcome: Result<T>) -> Result<T> {
        let current = ticket.generation == self.generation;
        if current {
            self.in_flight = false;
        }
        match outcome {
            Ok(value) => Ok(value),
            Err(e) => {
                if current {
                    tracing::warn!(username = %ticket.new_user.username, "add failed, removing row");
                    self.items
                        .retain(|row| !(row.is_placeholder() && row.user.id == ticket.placeholder));
                }
                Err(e)
            }
        }
    }

    /// Confirms the pending delete against the store.
    ///
    /// If this future is dropped before it completes, the store call still runs to the
    /// end but its outcome is never applied: the view stays busy until the next
    /// [`refresh`](Self::refresh) or [`reload`](Self::reload), which also picks up
    /// whatever was persisted.
    pub async fn confirm_delete<S: UserStore>(
        &mut self,
        api: &RosterApi<S>,
    ) -> Result<CmdResult> {
        let ticket = self.begin_delete()?;
        let outcome = api.delete_user(&ticket.target.id).await;
        self.settle_delete(ticket, outcome)
    }

    /// Validates, optimistically shows, and persists a new user. Dropping the future
    /// early behaves as for [`confirm_delete`](Self::confirm_delete).
    pub async fn submit_add<S: UserStore>(
        &mut self,
        api: &RosterApi<S>,
        new_user: NewUser,
    ) -> Result<CmdResult> {
        let ticket = self.begin_add(new_user)?;
        let outcome = api.add_user(ticket.new_user.clone()).await;
        if let Ok(result) = &outcome {
            if let Some(created) = result.affected_users.first() {
                tracing::debug!(placeholder = %ticket.placeholder, id = %created.id, "add persisted");
            }
        }
        self.settle_add(ticket, outcome)
    }

    /// Replaces the working copy with a freshly loaded collection, dropping any
    /// optimistic rows and invalidating outstanding tickets.
    pub fn refresh(&mut self, users: Vec<User>) {
        self.items = users.into_iter().map(Row::stored).collect();
        self.in_flight = false;
        self.generation += 1;
    }

    pub async fn reload<S: UserStore>(&mut self, api: &RosterApi<S>) -> Result<()> {
        let result = api.list_users().await?;
        self.refresh(result.listed_users);
        Ok(())
    }
}
