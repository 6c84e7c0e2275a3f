//! # Folio Architecture
//!
//! Folio is the record engine behind an academic portfolio: it takes the fixed
//! collections of blog posts and publications a site ships with, and answers the
//! questions a listing page asks of them. Which posts match this search and these
//! tags? Which publications match, grouped by year? What does the BibTeX export of
//! the current selection look like?
//!
//! It is a library first. The `folio` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders listings, writes export files  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the two record stores                               │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Builds listings: filtered, grouped, counted              │
//! │  - Sync and config operations returning `CmdResult`         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (filter/, group.rs, export.rs, query.rs, vocab.rs)  │
//! │  - Pure functions over borrowed records                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, source.rs)                          │
//! │  - Immutable `RecordStore`, replaced wholesale on sync      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Pure and Total
//!
//! Every engine operation is a synchronous pure function of its inputs. Filtering
//! never fails: a query naming tags or categories nobody uses simply matches
//! nothing. The only errors are data-integrity errors ([`error::FolioError::MalformedRecord`])
//! and failures at the edges (files, sync sources).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Listing, sync and config operations
//! - [`filter`]: Predicate engine and the generic filter pipeline
//! - [`group`]: Year grouping for publications
//! - [`export`]: BibTeX export blob
//! - [`query`]: Query state and its transitions
//! - [`vocab`]: Derived tag vocabulary and category counts
//! - [`store`]: Record store, built-in seed data, JSON loading
//! - [`source`]: Publication sync capability
//! - [`model`]: `Post` and `Publication`
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod group;
pub mod logging;
pub mod model;
pub mod query;
pub mod source;
pub mod store;
pub mod vocab;
