//! Back-Office Admin Console
//!
//! Interactive terminal driver for the roles administration screen.
//! Commands map one-to-one onto screen operations; the table and any
//! pending notices are re-rendered after every command.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use bo_client::{Config, RolesClient};
use bo_common::logging::init_logging;
use bo_common::notify::{NoticeLevel, RecordingSink};
use bo_screen::{ModalMode, RolesScreen};

/// Back-office role administration console
#[derive(Parser, Debug)]
#[command(name = "bo-admin")]
#[command(about = "Manage back-office roles from the terminal")]
struct Args {
    /// Base URL of the back-office API
    #[arg(long, env = "BO_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    /// Bearer token for the admin session
    #[arg(long, env = "BO_API_TOKEN")]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "BO_HTTP_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging("bo-admin");
    let args = Args::parse();

    let mut config = Config::new(&args.api_url)
        .with_timeout(Duration::from_secs(args.timeout_secs));
    if let Some(token) = args.token {
        config = config.with_bearer_token(token);
    }

    info!(api_url = %args.api_url, "starting admin console");

    let sink = Arc::new(RecordingSink::new());
    let mut screen = RolesScreen::new(RolesClient::new(config)?, sink.clone());

    screen.refresh().await;
    render(&screen, &sink);

    let stdin = io::stdin();
    loop {
        print!("bo> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" => break,
            "help" => print_help(),
            "list" => screen.refresh().await,
            "new" => screen.open_create(),
            "close" => screen.close(),
            "name" => screen.set_draft(rest),
            "save" => screen.submit().await,
            "view" | "edit" | "delete" => match parse_row(rest, &screen) {
                Some(id) => match command {
                    "view" => screen.open_view(id),
                    "edit" => screen.open_edit(id),
                    _ => screen.delete(id).await,
                },
                None => eprintln!("usage: {command} <row number>"),
            },
            other => eprintln!("unknown command: {other} (try `help`)"),
        }

        render(&screen, &sink);
    }

    Ok(())
}

/// Resolve a 1-based table row number to the role id behind it
fn parse_row(arg: &str, screen: &RolesScreen) -> Option<i64> {
    let row: usize = arg.parse().ok()?;
    screen.roles().get(row.checked_sub(1)?).map(|role| role.id)
}

fn render(screen: &RolesScreen, sink: &RecordingSink) {
    for notice in sink.drain() {
        match notice.level {
            NoticeLevel::Success => println!("  ok: {}", notice.message),
            NoticeLevel::Error => println!("  error: {}", notice.message),
        }
    }

    println!("{:<5} {:<28} {}", "Sl.", "Role Name", "Id");
    for (index, role) in screen.roles().iter().enumerate() {
        println!("{:<5} {:<28} {}", index + 1, role.name, role.id);
    }

    match screen.modal() {
        ModalMode::Closed => {}
        ModalMode::Viewing(role) => {
            println!("[view] Role Name: {} (read-only)", role.name);
        }
        ModalMode::Editing(_) | ModalMode::Creating => {
            println!("[form] Role Name: {}", screen.draft());
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  list         refresh the role table");
    println!("  view N       open row N read-only");
    println!("  edit N       open row N for renaming");
    println!("  new          open an empty role form");
    println!("  name TEXT    set the role-name field");
    println!("  save         submit the open form");
    println!("  delete N     delete row N");
    println!("  close        close the form");
    println!("  quit         leave the console");
}
