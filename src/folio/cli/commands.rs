//! # CLI Layer
//!
//! This module is **one possible UI client** for folio, not the application itself.
//!
//! It is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Writes the export file to disk
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API and output mode
//! - `handle_*()`: Per-command handlers that call the API and format output
//!
//! Business logic stays out of here; each handler builds a query, calls
//! [`FolioApi`], and prints what comes back.

use super::print::{
    print_config, print_json, print_messages, print_notices, print_post, print_posts,
    print_publications, print_tags,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use folio::api::{parse_category, FolioApi};
use folio::commands::config::ConfigAction;
use folio::commands::{CmdMessage, CmdResult};
use folio::error::{FolioError, Result};
use folio::logging;
use folio::query::{PostQuery, PublicationQuery};
use folio::source::{FallbackSource, JsonFileSource};
use std::io::Write;
use std::path::PathBuf;

struct AppContext {
    api: FolioApi,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Posts { search, tags }) => handle_posts(&ctx, search, tags),
        Some(Commands::Post { id }) => handle_post(&ctx, &id),
        Some(Commands::Tags) => handle_tags(&ctx),
        Some(Commands::Pubs { search, category }) => handle_pubs(&mut ctx, search, &category),
        Some(Commands::Export {
            search,
            category,
            output,
            stdout,
        }) => handle_export(&mut ctx, search, &category, output, stdout),
        Some(Commands::Copy { key, print }) => handle_copy(&mut ctx, &key, print),
        Some(Commands::Sync { from }) => handle_sync(&mut ctx, from),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_posts(&ctx, None, Vec::new()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "folio", "folio")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| FolioError::Config("Could not determine config dir".to_string()))?,
    };
    tracing::debug!(config_dir = %config_dir.display(), "opening folio");

    let api = FolioApi::open(config_dir)?;
    Ok(AppContext {
        api,
        json: cli.json,
    })
}

fn post_query(search: Option<String>, tags: Vec<String>) -> PostQuery {
    let mut query = PostQuery::new();
    if let Some(text) = search {
        query.set_search_text(text);
    }
    for tag in tags {
        if !query.is_selected(&tag) {
            query.toggle_tag(&tag);
        }
    }
    query
}

fn publication_query(search: Option<String>, category: &str) -> Result<PublicationQuery> {
    let mut query = PublicationQuery::new();
    if let Some(text) = search {
        query.set_search_text(text);
    }
    query.select_category(parse_category(category)?);
    Ok(query)
}

/// Applies the configured publications file before a publications command.
fn refresh(ctx: &mut AppContext) {
    let result = ctx.api.refresh_publications();
    print_notices(&result.messages);
}

fn handle_posts(ctx: &AppContext, search: Option<String>, tags: Vec<String>) -> Result<()> {
    let query = post_query(search, tags);
    let listing = ctx.api.list_posts(&query);
    if ctx.json {
        return print_json(&listing);
    }
    print_posts(&listing);
    Ok(())
}

fn handle_post(ctx: &AppContext, id: &str) -> Result<()> {
    let post = ctx.api.post(id)?;
    if ctx.json {
        return print_json(post);
    }
    print_post(post);
    Ok(())
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    let tags = ctx.api.tags();
    if ctx.json {
        return print_json(&tags);
    }
    print_tags(&tags);
    Ok(())
}

fn handle_pubs(ctx: &mut AppContext, search: Option<String>, category: &str) -> Result<()> {
    let query = publication_query(search, category)?;
    refresh(ctx);
    let listing = ctx.api.list_publications(&query)?;
    if ctx.json {
        return print_json(&listing);
    }
    print_publications(&listing);
    Ok(())
}

fn handle_export(
    ctx: &mut AppContext,
    search: Option<String>,
    category: &str,
    output: PathBuf,
    stdout: bool,
) -> Result<()> {
    let query = publication_query(search, category)?;
    refresh(ctx);
    let blob = ctx.api.export_publications(&query);

    if stdout {
        let mut out = std::io::stdout().lock();
        out.write_all(blob.bytes())?;
        if !blob.is_empty() {
            out.write_all(b"\n")?;
        }
        return Ok(());
    }

    let path = blob.write_to(&output)?;
    let mut result = CmdResult::default();
    if blob.is_empty() {
        result.add_message(CmdMessage::warning(
            "No BibTeX entries in the current selection",
        ));
    }
    result.add_message(CmdMessage::success(format!(
        "Exported {} entr{} to {}",
        blob.entries,
        if blob.entries == 1 { "y" } else { "ies" },
        path.display()
    )));
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(ctx: &mut AppContext, key: &str, print: bool) -> Result<()> {
    refresh(ctx);
    if print {
        println!("{}", ctx.api.citation(key)?);
        return Ok(());
    }
    let result = ctx.api.copy_citation(key)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_sync(ctx: &mut AppContext, from: Option<PathBuf>) -> Result<()> {
    let path = from.or_else(|| ctx.api.config().publications_file.clone());
    let result = match path {
        Some(path) => ctx.api.sync_publications(&JsonFileSource::new(path))?,
        None => ctx.api.sync_publications(&FallbackSource)?,
    };

    let listing = ctx.api.list_publications(&PublicationQuery::new())?;
    if ctx.json {
        print_notices(&result.messages);
        return print_json(&listing);
    }

    if let Some(id) = &ctx.api.config().researcher_id {
        println!("Researcher: {}", id);
    }
    print_messages(&result.messages);
    println!();
    print_publications(&listing);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (Some(key), Some(value)) => ConfigAction::Set { key, value },
        (key, _) => ConfigAction::Show(key),
    };
    let show_all = action == ConfigAction::Show(None);

    let result = ctx.api.config_action(action)?;
    if show_all {
        if let Some(config) = &result.config {
            if ctx.json {
                return print_json(config);
            }
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
