use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NewUser, User, UserId};
use crate::store::UserStore;

/// Prepends a new user with a freshly generated id.
///
/// The candidate is expected to be validated already.
pub async fn run<S: UserStore + ?Sized>(store: &S, new_user: NewUser) -> Result<CmdResult> {
    let mut users = store.load().await?;

    let mut id = UserId::generate();
    while users.iter().any(|u| u.id == id) {
        id = UserId::generate();
    }
    let user = User::from_new(id, new_user);
    users.insert(0, user.clone());
    store.save(&users).await?;

    let message = CmdMessage::success(format!("User added: {}", user.username));
    let mut result = CmdResult::default().with_affected_users(vec![user]);
    result.add_message(message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RosterError, StoreError};
    use crate::model::{Role, Status};
    use crate::store::memory::fixtures::{sample_store, sample_users};
    use crate::store::memory::InMemoryStore;
    use std::collections::HashSet;

    #[tokio::test]
    async fn prepends_with_a_new_id() {
        let store = sample_store();
        let candidate = NewUser::new("alice2", "a@b.com")
            .with_role(Role::Editor)
            .with_status(Status::Inactive);

        let result = run(&store, candidate).await.unwrap();
        let created = &result.affected_users[0];

        let stored = store.snapshot().await;
        assert_eq!(stored.len(), 4);
        assert_eq!(&stored[0], created);
        assert_eq!(created.username, "alice2");
        assert_eq!(created.role, Role::Editor);
        assert_eq!(created.status, Status::Inactive);
        assert_eq!(&stored[1..], &sample_users()[..]);

        let ids: HashSet<_> = stored.iter().map(|u| u.id.clone()).collect();
        assert_eq!(ids.len(), 4);
    }

    #[tokio::test]
    async fn repeated_adds_get_distinct_ids() {
        let store = InMemoryStore::new();
        let a = run(&store, NewUser::new("a", "a@x.io")).await.unwrap();
        let b = run(&store, NewUser::new("b", "b@x.io")).await.unwrap();

        assert_ne!(a.affected_users[0].id, b.affected_users[0].id);
        let stored = store.snapshot().await;
        assert_eq!(stored[0].username, "b");
        assert_eq!(stored[1].username, "a");
    }

    #[tokio::test]
    async fn read_failure_leaves_store_untouched() {
        let store = sample_store();
        store.set_simulate_read_error(true);

        let err = run(&store, NewUser::new("x", "x@y.z")).await.unwrap_err();
        assert!(matches!(err, RosterError::Store(StoreError::Unavailable(_))));
        assert_eq!(store.snapshot().await, sample_users());
    }

    #[tokio::test]
    async fn write_failure_is_reported() {
        let store = sample_store();
        store.set_simulate_write_error(true);

        assert!(run(&store, NewUser::new("x", "x@y.z")).await.is_err());
        assert_eq!(store.snapshot().await, sample_users());
    }
}
