//! UI utilities for the terminal session

use colored::*;
use crossterm::{
    event::{self, Event, KeyCode},
    terminal::{disable_raw_mode, enable_raw_mode, size},
};
use seodesk_core::Result;
use std::io::{self, IsTerminal, Write};

/// Display the startup banner
pub fn display_banner() {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = std::cmp::min(64, terminal_width.saturating_sub(4));

    let top_border = format!("┌{}┐", "─".repeat(banner_width - 2));
    let bottom_border = format!("└{}┘", "─".repeat(banner_width - 2));
    let empty_line = format!("│{}│", " ".repeat(banner_width - 2));

    println!();
    println!("{}", top_border.cyan());
    println!("{}", empty_line.cyan());

    let title = "seodesk - your SEO desk in the terminal";
    println!(
        "│  {}{}│",
        title.cyan().bold(),
        " ".repeat(banner_width.saturating_sub(title.len() + 3))
    );

    println!("{}", empty_line.cyan());

    let feature_lines = vec![
        "📊 Score titles, descriptions and keywords",
        "📁 Track projects and their score history",
        "✍️  Draft titles, descriptions and keyword ideas",
        "🎓 Work through the built-in SEO curriculum",
        "",
        "v0.1.0 • all data stays on this machine",
    ];

    for line in feature_lines {
        if line.is_empty() {
            println!("{}", empty_line.cyan());
        } else {
            let padding = " ".repeat(banner_width.saturating_sub(line.len() + 4));
            let content = if line.starts_with("v0.1.0") {
                format!("│  {}{}│", line.dimmed(), padding)
            } else {
                format!("│  {}{}│", line, padding)
            };
            println!("{}", content.cyan());
        }
    }

    println!("{}", empty_line.cyan());
    println!("{}", bottom_border.cyan());
    println!();
    println!(
        "{}",
        "💡 Tip: try 'analyze' to score a page, or 'help' for all commands".dimmed()
    );
    println!();
}

/// Display help message
pub fn print_help() {
    println!("{}", "Available commands:".bold());
    println!("  {} - Score a page's title, description and content", "analyze".green());
    println!("  {} - Save the last analysis to a project's history", "record <project>".green());
    println!("  {} - Manage tracked projects", "project add|list|status|rm".green());
    println!("  {} - Manage clients (agency mode)", "client add|list|rm".green());
    println!("  {} - Browse the curriculum / mark lessons done", "learn [done <lesson>]".green());
    println!("  {} - Draft content for a topic", "draft titles|descriptions|keywords|tips <topic>".green());
    println!("  {} - Show or switch the feature tier", "mode [beginner|pro|agency]".green());
    println!("  {} - Show workspace statistics", "stats".green());
    println!("  {} - Show this help message", "help".green());
    println!("  {} - Exit the application", "exit/quit".green());
    println!();
    println!("{}", "Examples:".bold());
    println!("  analyze");
    println!("  draft titles local seo");
    println!("  project add \"My Blog\" https://blog.example.com");
}

/// Handle input with command history navigation
pub fn read_line_with_history(history: &mut Vec<String>) -> Result<String> {
    // Piped input bypasses the interactive editor; EOF ends the session
    if !io::stdin().is_terminal() {
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok("exit".to_string());
        }
        let input = input.trim().to_string();
        if !input.is_empty() {
            history.push(input.clone());
        }
        return Ok(input);
    }

    enable_raw_mode()?;
    let mut input = String::new();
    let mut history_index: Option<usize> = None;
    let mut cursor_pos = 0;

    print!("{} ", "seodesk>".green().bold());
    io::stdout().flush()?;

    loop {
        if let Event::Key(key_event) = event::read()? {
            match key_event.code {
                KeyCode::Enter => {
                    disable_raw_mode()?;
                    println!();
                    if !input.is_empty() {
                        history.push(input.clone());
                    }
                    return Ok(input);
                }
                KeyCode::Char(c) => {
                    input.insert(cursor_pos, c);
                    cursor_pos += 1;
                    print!("\r{} {}", "seodesk>".green().bold(), input);
                    io::stdout().flush()?;
                }
                KeyCode::Backspace => {
                    if cursor_pos > 0 {
                        input.remove(cursor_pos - 1);
                        cursor_pos -= 1;
                        print!(
                            "\r{} {}  \r{} {}",
                            "seodesk>".green().bold(),
                            input,
                            "seodesk>".green().bold(),
                            input
                        );
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Up => {
                    if !history.is_empty() {
                        let new_index = match history_index {
                            None => history.len() - 1,
                            Some(idx) if idx > 0 => idx - 1,
                            Some(idx) => idx,
                        };
                        history_index = Some(new_index);
                        input = history[new_index].clone();
                        cursor_pos = input.len();
                        print!(
                            "\r{} {}  \r{} {}",
                            "seodesk>".green().bold(),
                            " ".repeat(50),
                            "seodesk>".green().bold(),
                            input
                        );
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Down => {
                    if let Some(idx) = history_index {
                        if idx < history.len() - 1 {
                            let new_index = idx + 1;
                            history_index = Some(new_index);
                            input = history[new_index].clone();
                        } else {
                            history_index = None;
                            input.clear();
                        }
                        cursor_pos = input.len();
                        print!(
                            "\r{} {}  \r{} {}",
                            "seodesk>".green().bold(),
                            " ".repeat(50),
                            "seodesk>".green().bold(),
                            input
                        );
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Esc => {
                    disable_raw_mode()?;
                    println!();
                    return Ok(String::new());
                }
                _ => {}
            }
        }
    }
}

/// Prompt for one line of free text (used by the analyze flow)
pub(crate) fn prompt_line(label: &str) -> Result<String> {
    print!("{} ", format!("{}:", label).cyan());
    io::stdout().flush()?;

    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}
