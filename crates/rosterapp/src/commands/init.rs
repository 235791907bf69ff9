use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::fs::FileStore;
use crate::store::UserStore;

/// Creates an empty collection file unless one is already there.
pub async fn run(store: &FileStore) -> Result<CmdResult> {
    let path = store.path();
    let mut result = CmdResult::default();

    if tokio::fs::try_exists(path).await? {
        result.add_message(CmdMessage::info(format!(
            "User store already exists at {}",
            path.display()
        )));
        return Ok(result);
    }

    store.save(&[]).await?;
    result.add_message(CmdMessage::success(format!(
        "Initialized user store at {}",
        path.display()
    )));
    Ok(result)
}
