use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::UserId;
use crate::store::UserStore;

/// Removes the user with `id`. An unknown id is not an error: the collection is
/// rewritten unchanged and the result carries no affected users.
pub async fn run<S: UserStore + ?Sized>(store: &S, id: &UserId) -> Result<CmdResult> {
    let mut users = store.load().await?;
    let position = users.iter().position(|u| &u.id == id);
    let removed = position.map(|i| users.remove(i));
    store.save(&users).await?;

    let mut result = CmdResult::default();
    match removed {
        Some(user) => {
            result.add_message(CmdMessage::success(format!(
                "User deleted: {}",
                user.username
            )));
            result.affected_users.push(user);
        }
        None => {
            result.add_message(CmdMessage::info(format!(
                "No user with id {}; nothing deleted",
                id
            )));
        }
    }
    Ok(result)
}
