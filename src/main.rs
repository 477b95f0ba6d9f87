//! Viewer Data command line
//!
//! Inspects and edits an account's recent people list.
//!
//! ```text
//! viewer-data <account> <agent-id> list
//! viewer-data <account> <agent-id> add <avatar-id>...
//! viewer-data <account> <agent-id> clear
//! ```
//!
//! `VIEWER_DATA_DIR` overrides the storage root.

use std::path::PathBuf;

use uuid::Uuid;
use viewer_data::Session;
use viewer_data::platform::{AccountPaths, Clock, SystemClock};
use viewer_data::record::format_last_seen;

const USAGE: &str = "Usage: viewer-data <account> <agent-id> <list | add <avatar-id>... | clear>";

fn main() {
    env_logger::init();
    log::info!("Viewer Data starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let [account, agent, command, rest @ ..] = args else {
        return Err(USAGE.into());
    };
    let agent_id = parse_id(agent)?;
    let paths = storage_paths(account)?;
    let mut session = Session::start(agent_id, paths);
    log::info!(
        "Using account directory {}",
        session.paths().account_dir().display()
    );

    match command.as_str() {
        "list" => {
            list(&session);
            Ok(())
        }
        "add" if !rest.is_empty() => {
            for arg in rest {
                let id = parse_id(arg)?;
                session
                    .recent_people_mut()
                    .record_interaction(id)
                    .map_err(|e| e.to_string())?;
                println!("Added {}", id);
            }
            Ok(())
        }
        "clear" => {
            session
                .recent_people_mut()
                .clear_history()
                .map_err(|e| e.to_string())?;
            println!("Recent people cleared.");
            Ok(())
        }
        _ => Err(USAGE.into()),
    }
}

fn list(session: &Session) {
    let people = session.recent_people();
    if people.is_empty() {
        println!("No recent people.");
        return;
    }

    let now = SystemClock.now();
    let mut entries: Vec<_> = people.ids().into_iter().map(|id| (people.date(&id), id)).collect();
    // Most recent first, undated last
    entries.sort_by(|a, b| b.0.cmp(&a.0));

    for (date, id) in entries {
        let seen = date.map(|d| format_last_seen(d, now)).unwrap_or_else(|| "N/A".to_string());
        println!("{}  {}", id, seen);
    }
}

fn parse_id(s: &str) -> Result<Uuid, String> {
    Uuid::parse_str(s).map_err(|e| format!("Invalid id '{}': {}", s, e))
}

fn storage_paths(account: &str) -> Result<AccountPaths, String> {
    match std::env::var_os("VIEWER_DATA_DIR") {
        Some(root) => Ok(AccountPaths::with_root(PathBuf::from(root), account)),
        None => AccountPaths::new(account).ok_or_else(|| "Cannot find data directory".to_string()),
    }
}
