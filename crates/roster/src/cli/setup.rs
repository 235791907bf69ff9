use clap::{Parser, Subcommand, ValueEnum};
use rosterapp::model::{Role, Status};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Manage a JSON-backed list of user accounts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// User data file (overrides configuration)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List users
    #[command(alias = "ls")]
    List {
        /// Only show users whose username, email, role or status contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Sort by username
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,
    },

    /// Add a user
    Add {
        username: String,

        email: String,

        /// admin, editor or user
        #[arg(short, long, default_value = "user")]
        role: Role,

        /// active, inactive or banned
        #[arg(short, long, default_value = "active")]
        status: Status,
    },

    /// Delete a user by id, username or row number
    #[command(alias = "rm")]
    Delete {
        target: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Create an empty user data file
    Init,

    /// Show the resolved configuration
    Config,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_defaults() {
        let cli = Cli::try_parse_from(["roster", "add", "alice", "a@b.com"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                username,
                email,
                role,
                status,
            }) => {
                assert_eq!(username, "alice");
                assert_eq!(email, "a@b.com");
                assert_eq!(role, Role::User);
                assert_eq!(status, Status::Active);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_role_and_status() {
        let cli = Cli::try_parse_from([
            "roster", "add", "bob", "b@c.io", "--role", "admin", "--status", "banned",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Add {
                role: Role::Admin,
                status: Status::Banned,
                ..
            })
        ));
    }

    #[test]
    fn rejects_unknown_role() {
        assert!(Cli::try_parse_from(["roster", "add", "x", "x@y.z", "--role", "owner"]).is_err());
    }

    #[test]
    fn parses_list_search_and_sort() {
        let cli = Cli::try_parse_from(["roster", "ls", "-s", "ali", "--sort", "desc"]).unwrap();
        match cli.command {
            Some(Commands::List { search, sort }) => {
                assert_eq!(search.as_deref(), Some("ali"));
                assert_eq!(sort, Some(SortOrder::Desc));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_data_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["roster", "delete", "2", "--yes", "--data", "x.json"])
            .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("x.json")));
        assert!(matches!(cli.command, Some(Commands::Delete { yes: true, .. })));
    }

    #[test]
    fn no_command_is_allowed() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        assert!(cli.command.is_none());
    }
}
