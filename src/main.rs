use clap::Parser;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use show_scout::{Controller, TvMazeClient};
use std::io;
use std::process;

/// Search a TVMaze-compatible catalog and browse episode lists.
#[derive(Debug, Parser)]
#[command(name = "show_scout", version, about)]
struct Cli {
    /// Base URL of the catalog API
    #[arg(long, default_value = "https://api.tvmaze.com")]
    base_url: String,

    /// Run a single search and print the results instead of starting the
    /// interactive loop
    #[arg(long)]
    term: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    let controller = Controller::new(TvMazeClient::with_base_url(&cli.base_url));

    let result = match cli.term {
        Some(term) => run_once(controller, &term).map_err(dialoguer::Error::from),
        None => run_interactive(controller),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// One-shot mode: search, print the cards, exit.
fn run_once(mut controller: Controller, term: &str) -> io::Result<()> {
    match controller.search(term) {
        Ok(0) => println!("No shows matched '{}'.", term),
        Ok(count) => {
            println!("Found {} show(s) for '{}':\n", count, term);
            controller.show_list().write_to(io::stdout().lock())?;
        }
        Err(e) => {
            eprintln!("Search failed: {}", e);
            process::exit(1);
        }
    }
    Ok(())
}

/// Interactive mode: prompt for search terms until the user quits.
///
/// Operation failures are surfaced as a message and the loop continues;
/// the panels keep whatever they showed before the failed operation.
fn run_interactive(mut controller: Controller) -> dialoguer::Result<()> {
    let theme = ColorfulTheme::default();

    loop {
        let term: String = Input::with_theme(&theme)
            .with_prompt("Search shows (empty to quit)")
            .allow_empty(true)
            .interact_text()?;
        let term = term.trim();

        if term.is_empty() {
            return Ok(());
        }

        match controller.search(term) {
            Ok(0) => {
                println!("No shows matched '{}'.", term);
                continue;
            }
            Ok(count) => println!("\nFound {} show(s):\n", count),
            Err(e) => {
                eprintln!("Search failed: {}", e);
                continue;
            }
        }

        controller.show_list().write_to(io::stdout().lock())?;
        println!();

        browse_results(&mut controller, &theme)?;
    }
}

/// Menu over the current result cards; returns when the user picks
/// "Search again".
fn browse_results(controller: &mut Controller, theme: &ColorfulTheme) -> dialoguer::Result<()> {
    loop {
        let mut items = controller.show_list().card_titles();
        items.push("Search again".to_string());

        let selection = Select::with_theme(theme)
            .with_prompt("Show episodes for")
            .items(&items)
            .default(0)
            .interact()?;

        if selection == items.len() - 1 {
            return Ok(());
        }

        match controller.fetch_episodes(selection) {
            Ok(0) => println!("No episodes listed for '{}'.", items[selection]),
            Ok(_) => {
                println!();
                controller.episode_panel().write_to(io::stdout().lock())?;
                println!();
            }
            Err(e) => eprintln!("Could not fetch episodes: {}", e),
        }
    }
}
