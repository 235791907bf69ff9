use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::UserStore;

pub async fn run<S: UserStore + ?Sized>(store: &S) -> Result<CmdResult> {
    let users = store.load().await?;
    Ok(CmdResult::default().with_listed_users(users))
}
