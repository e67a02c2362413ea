//! Terminal front end for Accessible Notes.
//!
//! Every invocation runs one screen session: load, apply one trigger,
//! print the outcome.

use accnotes_core::{
    core_version, init_logging, ping, AlertQueue, AppConfig, NoteStore, NotesScreen,
    SqliteKeyValueStore,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

type Screen = NotesScreen<SqliteKeyValueStore, AlertQueue>;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// SQLite file holding the notes
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Storage key of the note list
    #[arg(long, global = true)]
    key: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check core linkage
    Ping,
    /// Print every note
    List,
    /// Print notes whose title or text contains QUERY (case-insensitive)
    Search { query: String },
    /// Append a note
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        text: String,
    },
    /// Replace fields of the note at INDEX; omitted fields are kept
    Edit {
        index: usize,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        text: Option<String>,
    },
    /// Remove the note at INDEX
    Delete { index: usize },
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Command::Ping = args.command {
        println!("accnotes_core ping={}", ping());
        println!("accnotes_core version={}", core_version());
        return Ok(());
    }

    let config = resolve_config(&args, AppConfig::from_env());
    if let Some(log_dir) = &config.log_dir {
        let log_dir = log_dir
            .to_str()
            .context("log directory must be valid UTF-8")?;
        init_logging(&config.log_level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let storage = SqliteKeyValueStore::open(&config.db_path)
        .with_context(|| format!("failed to open {}", config.db_path.display()))?;
    let mut screen = NotesScreen::new(
        NoteStore::with_key(storage, config.storage_key),
        AlertQueue::new(),
    );
    screen.start();

    run(&mut screen, args.command)
}

fn resolve_config(args: &Args, mut config: AppConfig) -> AppConfig {
    if let Some(db) = &args.db {
        config.db_path = db.clone();
    }
    if let Some(key) = &args.key {
        config.storage_key = key.clone();
    }
    if let Some(log_dir) = &args.log_dir {
        config.log_dir = Some(log_dir.clone());
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    config
}

fn run(screen: &mut Screen, command: Command) -> Result<()> {
    match command {
        Command::Ping => {}
        Command::List => print_visible(screen),
        Command::Search { query } => {
            screen.change_query(query);
            print_visible(screen);
        }
        Command::Add { title, text } => {
            screen.begin_create();
            screen.change_title(title);
            screen.change_text(text);
            let result = screen.save();
            print_alerts(screen);
            result?;
        }
        Command::Edit { index, title, text } => {
            screen.begin_edit(index)?;
            if let Some(title) = title {
                screen.change_title(title);
            }
            if let Some(text) = text {
                screen.change_text(text);
            }
            let result = screen.save();
            print_alerts(screen);
            result?;
        }
        Command::Delete { index } => {
            let removed = screen.delete(index)?;
            println!("deleted [{index}] {}", removed.title);
        }
    }
    Ok(())
}

fn print_visible(screen: &Screen) {
    let mut shown = 0usize;
    for hit in screen.visible_notes().iter() {
        shown += 1;
        println!("[{}] {}", hit.index, hit.note.title);
        for line in hit.note.text.lines() {
            println!("    {line}");
        }
    }
    if shown == 0 {
        println!("No notes.");
    }
}

fn print_alerts(screen: &mut Screen) {
    for alert in screen.notifier_mut().drain() {
        println!("{}: {}", alert.title, alert.message);
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_config, run, Args, Command};
    use accnotes_core::{AlertQueue, AppConfig, NoteStore, NotesScreen, SqliteKeyValueStore};
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_override_environment_config() {
        let args = Args::parse_from(["accnotes", "--db", "/tmp/x.db", "--key", "k", "list"]);
        let config = resolve_config(&args, AppConfig::default());
        assert_eq!(config.db_path, PathBuf::from("/tmp/x.db"));
        assert_eq!(config.storage_key, "k");
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn add_edit_delete_commands_drive_the_screen() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SqliteKeyValueStore::open(dir.path().join("cli.sqlite3")).unwrap();
        let mut screen = NotesScreen::new(NoteStore::new(storage), AlertQueue::new());
        screen.start();

        run(
            &mut screen,
            Command::Add {
                title: "one".to_string(),
                text: "body".to_string(),
            },
        )
        .unwrap();
        run(
            &mut screen,
            Command::Edit {
                index: 0,
                title: None,
                text: Some("changed".to_string()),
            },
        )
        .unwrap();
        assert_eq!(screen.notes()[0].title, "one");
        assert_eq!(screen.notes()[0].text, "changed");

        run(&mut screen, Command::Delete { index: 0 }).unwrap();
        assert!(screen.notes().is_empty());
        assert!(run(&mut screen, Command::Delete { index: 0 }).is_err());
    }
}
