//! Terminal front end for the items API.
//!
//! Loads the collection once on start, then reads one command per line,
//! applies it, and redraws the page.

mod command;
mod render;
mod session;
mod transport;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use items_core::{ItemClient, ItemList};

use session::{Flow, Session};
use transport::UreqTransport;

#[derive(Parser, Debug)]
#[command(name = "items")]
#[command(version)]
#[command(about = "List, create, edit and delete items on an items API", long_about = None)]
struct Args {
    /// Server root; `/api/v1/items` is appended
    #[arg(long, env = "ITEMS_API_URL", default_value = "http://localhost:8080")]
    base_url: String,

    /// Answer yes to every delete confirmation
    #[arg(short, long)]
    yes: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let client = ItemClient::new(&args.base_url);
    log::info!("using {}", client.collection_url());

    let mut session = Session::new(ItemList::new(client), UreqTransport::new());
    println!("{}", session.render());
    session.mount();
    println!("{}", session.render());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match command::parse(&line) {
            Ok(command) => command,
            Err(command::ParseError::Empty) => continue,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        let yes = args.yes;
        let mut ask = |prompt: &str| -> bool {
            if yes {
                return true;
            }
            print!("{prompt} [y/N] ");
            if io::stdout().flush().is_err() {
                return false;
            }
            match lines.next() {
                Some(Ok(answer)) => matches!(answer.trim(), "y" | "Y" | "yes"),
                _ => false,
            }
        };

        let (flow, note) = session.apply(command, &mut ask);
        if flow == Flow::Quit {
            break;
        }
        if let Some(note) = note {
            println!("{note}");
        }
        println!("{}", session.render());
    }

    Ok(())
}
