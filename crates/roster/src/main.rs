//! # Roster CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, and this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/roster/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal tables and messages (render.rs)                 │
//! │  - tracing subscriber (logging.rs)                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  rosterapp: view-state, API facade, commands, store         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The CLI is the only place that knows about stdout, stderr, prompts and exit codes.
//! Each invocation is one short session: it loads the collection into a
//! `UserListView`, drives the view through the requested action, and renders the
//! result.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
