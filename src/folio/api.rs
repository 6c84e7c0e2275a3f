//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every folio operation, whatever the UI.
//!
//! The facade:
//! - **Owns** the post and publication stores and the loaded configuration
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g. category names typed on the command line)
//!
//! It does no printing and no formatting. Listings come back as data; sync and
//! config come back as [`commands::CmdResult`].
//!
//! Syncing takes `&mut self`, so a sync cannot overlap another sync or a read of
//! the listing it replaces.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::clipboard;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::config::FolioConfig;
use crate::error::Result;
use crate::export::ExportBlob;
use crate::model::{Post, Publication};
use crate::query::{CategorySelection, PostQuery, PublicationQuery};
use crate::source::{JsonFileSource, PublicationSource};
use crate::store::{file, seed, RecordStore};

pub struct FolioApi {
    posts: RecordStore<Post>,
    publications: RecordStore<Publication>,
    config: FolioConfig,
    config_dir: PathBuf,
}

impl FolioApi {
    pub fn new(
        posts: RecordStore<Post>,
        publications: RecordStore<Publication>,
        config: FolioConfig,
        config_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            posts,
            publications,
            config,
            config_dir: config_dir.into(),
        }
    }

    /// Built-in blog and fallback publications, default config.
    pub fn builtin(config_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(
            RecordStore::new(seed::blog_posts())?,
            RecordStore::new(seed::fallback_publications())?,
            FolioConfig::default(),
            config_dir,
        ))
    }

    /// Loads `config.json` from `config_dir` and builds the stores it points at.
    ///
    /// Posts come from `posts_file` when set, the built-in blog otherwise.
    /// Publications always start from the built-in list; a configured
    /// `publications_file` is applied through [`FolioApi::refresh_publications`].
    pub fn open(config_dir: impl Into<PathBuf>) -> Result<Self> {
        let config_dir = config_dir.into();
        let config = FolioConfig::load(&config_dir)?;

        let posts = match &config.posts_file {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading posts");
                file::load_store(path)?
            }
            None => RecordStore::new(seed::blog_posts())?,
        };
        let publications = RecordStore::new(seed::fallback_publications())?;

        Ok(Self::new(posts, publications, config, config_dir))
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn posts(&self) -> &RecordStore<Post> {
        &self.posts
    }

    pub fn publications(&self) -> &RecordStore<Publication> {
        &self.publications
    }

    // --- Blog ---

    pub fn list_posts(&self, query: &PostQuery) -> commands::posts::BlogListing<'_> {
        commands::posts::list(&self.posts, query)
    }

    pub fn post(&self, id: &str) -> Result<&Post> {
        commands::posts::find(&self.posts, id)
    }

    pub fn tags(&self) -> Vec<String> {
        commands::posts::tags(&self.posts)
    }

    // --- Publications ---

    pub fn list_publications(
        &self,
        query: &PublicationQuery,
    ) -> Result<commands::publications::PublicationListing<'_>> {
        commands::publications::list(&self.publications, query)
    }

    /// Export blob for the query. Always `publications.bib`, `text/plain`.
    pub fn export_publications(&self, query: &PublicationQuery) -> ExportBlob {
        commands::publications::export(&self.publications, query)
    }

    pub fn citation(&self, key: &str) -> Result<&str> {
        commands::publications::citation(&self.publications, key)
    }

    /// Puts one publication's BibTeX entry on the system clipboard.
    pub fn copy_citation(&self, key: &str) -> Result<CmdResult> {
        let bibtex = self.citation(key)?;
        clipboard::copy_to_clipboard(&clipboard::format_citation(bibtex))?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Copied BibTeX for '{}' to clipboard",
            key
        )));
        Ok(result)
    }

    pub fn sync_publications<P>(&mut self, source: &P) -> Result<CmdResult>
    where
        P: PublicationSource + ?Sized,
    {
        commands::sync::run(&mut self.publications, source)
    }

    /// Syncs from the configured `publications_file`, if any. A failed sync keeps
    /// the current publications and is reported as a warning instead of an error.
    pub fn refresh_publications(&mut self) -> CmdResult {
        let Some(path) = self.config.publications_file.clone() else {
            return CmdResult::default();
        };
        let source = JsonFileSource::new(path);
        match self.sync_publications(&source) {
            Ok(result) => result,
            Err(e) => {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::warning(format!(
                    "Using built-in publications: {}",
                    e
                )));
                result
            }
        }
    }

    // --- Config ---

    /// Shows or changes the config. A `Set` is saved to the config directory and
    /// takes effect for the rest of this session.
    pub fn config_action(&mut self, action: commands::config::ConfigAction) -> Result<CmdResult> {
        commands::config::run(&mut self.config, &self.config_dir, action)
    }
}

/// Parses a category name as typed by a user (`all`, `journal`, ...).
pub fn parse_category(input: &str) -> Result<CategorySelection> {
    CategorySelection::from_str(&input.trim().to_ascii_lowercase())
}
