//! CLI tool for inspecting book catalog files.
//!
//! Works offline on the same JSON seed the server loads at startup, so a
//! catalog can be checked before it is deployed.
//!
//! # Usage
//!
//! ```bash
//! # Validate the catalog and print totals
//! cargo run --bin catalog -- check books.json
//!
//! # List every book with its copy counts
//! cargo run --bin catalog -- list books.json
//!
//! # Only books with a free copy
//! cargo run --bin catalog -- list --available
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOG_PATH` (optional): default path when none is given

use book_rental::domain::entities::Book;
use book_rental::infrastructure::catalog::load_catalog;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

/// CLI tool for book-rental catalogs.
#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Catalog subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Validate a catalog file
    Check {
        /// Catalog path (defaults to CATALOG_PATH or books.json)
        path: Option<PathBuf>,
    },

    /// List the books in a catalog file
    List {
        /// Catalog path (defaults to CATALOG_PATH or books.json)
        path: Option<PathBuf>,

        /// Only show books with a free copy
        #[arg(short, long)]
        available: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { path } => check(resolve_path(path))?,
        Commands::List { path, available } => list(resolve_path(path), available)?,
    }

    Ok(())
}

/// Explicit argument, then `CATALOG_PATH`, then `books.json`.
fn resolve_path(path: Option<PathBuf>) -> PathBuf {
    path.or_else(|| std::env::var("CATALOG_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("books.json"))
}

fn load(path: &Path) -> Result<Vec<Book>> {
    load_catalog(path).with_context(|| format!("Catalog {} is invalid", path.display()))
}

/// Validates the catalog and prints a summary.
fn check(path: PathBuf) -> Result<()> {
    println!("{}", "Checking catalog".bright_blue().bold());
    println!("  File: {}", path.display().to_string().cyan());

    let books = match load(&path) {
        Ok(books) => books,
        Err(e) => {
            println!("{} {:#}", "Invalid:".red().bold(), e);
            return Err(e);
        }
    };

    let total_copies: u32 = books.iter().map(|b| b.total_copies).sum();
    let available_copies: u32 = books.iter().map(|b| b.available_copies).sum();
    let fully_rented = books.iter().filter(|b| !b.is_available()).count();

    println!();
    println!("{}", "Catalog is valid".green().bold());
    println!("  Books:            {}", books.len().to_string().bright_white());
    println!("  Copies:           {}", total_copies.to_string().bright_white());
    println!("  Available copies: {}", available_copies.to_string().bright_white());
    if fully_rented > 0 {
        println!(
            "  {}",
            format!("{fully_rented} book(s) start with no free copy").yellow()
        );
    }

    Ok(())
}

/// Prints one line per book.
fn list(path: PathBuf, only_available: bool) -> Result<()> {
    let books = load(&path)?;

    let mut books: Vec<Book> = books
        .into_iter()
        .filter(|b| !only_available || b.is_available())
        .collect();
    books.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));

    if books.is_empty() {
        println!("{}", "No books found".yellow());
        return Ok(());
    }

    println!("{}", format!("{} book(s)", books.len()).bright_blue().bold());
    println!();

    for book in &books {
        let copies = format!("{}/{}", book.available_copies, book.total_copies);
        let copies = if book.is_available() {
            copies.green()
        } else {
            copies.red()
        };

        let year = book
            .published_year
            .map(|y| format!(" ({y})"))
            .unwrap_or_default();

        println!(
            "  {:<16} {} {}{} {}",
            book.id.bright_white(),
            book.title.cyan().bold(),
            format!("by {}", book.author).dimmed(),
            year.dimmed(),
            copies
        );
    }

    Ok(())
}
