//! Terminal stand-in for the page that hosts the widget: builds the
//! default page, forwards typed-in events as clicks, and prints the
//! rendered feed after each one.

use clap::{ArgAction, Parser};
use plaza_core::config::PlazaConfig;
use plaza_core::store::Store;
use plaza_core::PlazaResult;
use plaza_widget::dispatch::{like_control_id, nav_control_id, SUBMIT_CONTROL};
use plaza_widget::nav::target_fragment;
use plaza_widget::page::Page;
use plaza_widget::FeedWidget;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "DIR")]
    /// Profile directory; defaults to ~/.plaza
    profile: Option<PathBuf>,

    #[arg(long, action = ArgAction::SetTrue)]
    /// Keep the feed in memory; nothing is written to disk
    ephemeral: bool,
}

fn main() -> PlazaResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut widget = if cli.ephemeral {
        FeedWidget::with_store(Store::in_memory()?, Page::with_defaults())
    } else {
        let dir = cli
            .profile
            .unwrap_or_else(|| PlazaConfig::default().dirpath);
        let config = PlazaConfig::load(dir)?;
        FeedWidget::open(&config, Page::with_defaults())?
    };

    widget.boot()?;
    print_page(&widget);

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "post" => {
                widget.set_input(rest);
                widget.click(SUBMIT_CONTROL)?;
            }
            "like" => match rest.parse::<u64>() {
                Ok(id) => widget.click(&like_control_id(id))?,
                Err(_) => println!("usage: like <post id>"),
            },
            "open" => widget.click(&nav_control_id(target_fragment(rest)))?,
            "show" => {}
            "quit" | "exit" => break,
            _ => {
                println!("commands: post <text> | like <id> | open <section> | show | quit");
                continue;
            }
        }

        print_page(&widget);
    }

    Ok(())
}

fn print_page(widget: &FeedWidget) {
    match widget.page().visible_section() {
        Some(section) => println!("== section: {section} =="),
        None => println!("== no section visible =="),
    }
    // Cards and posts share one order, so the ids line up.
    for (post, card) in widget.feed().posts().iter().zip(widget.page().cards()) {
        println!("post {}", post.id());
        println!("{card}");
    }
}
