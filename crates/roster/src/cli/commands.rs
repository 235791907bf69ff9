use super::render::{print_messages, print_users};
use super::setup::{Cli, Commands, SortOrder};
use anyhow::{bail, Context};
use rosterapp::api::RosterApi;
use rosterapp::commands;
use rosterapp::config::RosterConfig;
use rosterapp::model::{NewUser, Role, Status};
use rosterapp::selector::UserSelector;
use rosterapp::store::fs::FileStore;
use rosterapp::view::UserListView;
use std::io::{BufRead, Write};

/// Everything a handler needs: the API over the resolved data file and the
/// configuration it was built from.
pub struct AppContext {
    pub api: RosterApi<FileStore>,
    pub config: RosterConfig,
}

impl AppContext {
    pub fn new(config: RosterConfig) -> Self {
        let api = RosterApi::new(FileStore::new(&config.data_file)).with_timeout(config.timeout());
        Self { api, config }
    }
}

pub async fn dispatch(cli: Cli, config: RosterConfig) -> anyhow::Result<()> {
    let ctx = AppContext::new(config);

    match cli.command {
        None => handle_list(&ctx, None, None).await,
        Some(Commands::List { search, sort }) => handle_list(&ctx, search, sort).await,
        Some(Commands::Add {
            username,
            email,
            role,
            status,
        }) => handle_add(&ctx, username, email, role, status).await,
        Some(Commands::Delete { target, yes }) => handle_delete(&ctx, &target, yes).await,
        Some(Commands::Init) => handle_init(&ctx).await,
        Some(Commands::Config) => handle_config(&ctx),
    }
}

async fn load_view(ctx: &AppContext) -> anyhow::Result<UserListView> {
    let path = &ctx.config.data_file;
    let exists = tokio::fs::try_exists(path)
        .await
        .with_context(|| format!("cannot access user store {}", path.display()))?;
    if !exists {
        bail!(
            "No user store at {}. Run `roster init` to create one.",
            path.display()
        );
    }
    Ok(UserListView::load(&ctx.api).await?)
}

async fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    sort: Option<SortOrder>,
) -> anyhow::Result<()> {
    let mut view = load_view(ctx).await?;

    if let Some(query) = search {
        view.set_query(query);
    }
    // The view only cycles; descending is two steps from unsorted.
    let steps = match sort {
        None => 0,
        Some(SortOrder::Asc) => 1,
        Some(SortOrder::Desc) => 2,
    };
    for _ in 0..steps {
        view.cycle_sort();
    }

    print_users(&view.projection());
    Ok(())
}

async fn handle_add(
    ctx: &AppContext,
    username: String,
    email: String,
    role: Role,
    status: Status,
) -> anyhow::Result<()> {
    let mut view = load_view(ctx).await?;
    let new_user = NewUser::new(username, email)
        .with_role(role)
        .with_status(status);

    let result = view.submit_add(&ctx.api, new_user).await?;
    print_messages(&result.messages);
    Ok(())
}

async fn handle_delete(ctx: &AppContext, target: &str, yes: bool) -> anyhow::Result<()> {
    let mut view = load_view(ctx).await?;
    let selector: UserSelector = target.parse()?;
    let user = view.select(&selector)?.user.clone();

    view.request_delete(user.clone());
    if !yes && !confirm(&format!("Delete user \"{}\"? [y/N] ", user.username))? {
        view.cancel_delete();
        println!("Delete cancelled.");
        return Ok(());
    }

    let result = view.confirm_delete(&ctx.api).await?;
    print_messages(&result.messages);
    Ok(())
}

async fn handle_init(ctx: &AppContext) -> anyhow::Result<()> {
    let result = commands::init::run(ctx.api.store()).await?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext) -> anyhow::Result<()> {
    let config = &ctx.config;
    println!("data_file  = {}", config.data_file.display());
    println!("timeout_ms = {}", config.timeout_ms);
    println!("log_json   = {}", config.log_json);
    Ok(())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("cannot read confirmation")?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
