use anyhow::Result;
use clap::Parser;
use colored::*;

// Import from our modular crates
use seodesk_cli::{Session, display_banner, print_help, read_line_with_history};
use seodesk_content::{StudioConfig, TemplateStudio};
use seodesk_store::{SeoWorkspace, WorkspaceConfig};

#[derive(Parser)]
#[command(name = "seodesk")]
#[command(about = "Terminal SEO assistant: score pages, draft content, track projects", long_about = None)]
struct Cli {
    /// Direct command to execute (runs once and exits)
    #[arg(short, long)]
    command: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Initialize components
    let store = SeoWorkspace::open(&WorkspaceConfig::from_env())?;
    let studio = TemplateStudio::new(StudioConfig::from_env()?);
    let mut session = Session::new(store, Box::new(studio));

    // Handle direct command execution
    if let Some(line) = cli.command {
        if let Err(e) = session.handle(&line).await {
            eprintln!("{} {}", "❌".red(), e);
            std::process::exit(1);
        }
        return Ok(());
    }

    // Interactive mode
    display_banner();

    let mut history = Vec::new();

    loop {
        let input = read_line_with_history(&mut history)?;

        if input.is_empty() {
            continue;
        }

        let input_lower = input.to_lowercase();

        // Handle special commands
        if input_lower == "exit" || input_lower == "quit" {
            println!("{}", "👋 Goodbye!".green());
            break;
        }

        if input_lower == "help" {
            print_help();
            continue;
        }

        if let Err(e) = session.handle(&input).await {
            println!("{} {}", "❌".red(), e);
        }
    }

    Ok(())
}
