//! BibTeX export of a publication selection.
//!
//! The export is a pure transform from "currently filtered publications" to the
//! content of a downloadable file. Each publication carries its own pre-rendered
//! BibTeX entry; folio never generates citation text, it only concatenates.
//!
//! Writing the blob somewhere (the "download") is a separate, explicit step:
//! [`ExportBlob::write_to`], called once by the client.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FolioError, Result};
use crate::model::Publication;

pub const EXPORT_FILE_NAME: &str = "publications.bib";
pub const EXPORT_MEDIA_TYPE: &str = "text/plain";
const ENTRY_SEPARATOR: &str = "\n\n";

/// Content of an export download. The file name and media type are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportBlob {
    pub file_name: &'static str,
    pub media_type: &'static str,
    pub content: String,
    /// How many entries made it into `content`.
    pub entries: usize,
}

impl ExportBlob {
    pub fn bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Writes the blob into `dir` (created if missing) as `publications.bib` and
    /// returns the full path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir).map_err(FolioError::Io)?;
        let path = dir.join(self.file_name);
        fs::write(&path, self.bytes()).map_err(FolioError::Io)?;
        tracing::info!(path = %path.display(), entries = self.entries, "wrote export");
        Ok(path)
    }
}

/// Joins the BibTeX entries of `publications` with a blank line.
///
/// Publications without an entry are skipped; there is no leading or trailing
/// separator.
pub fn export_bibtex<'a, I>(publications: I) -> ExportBlob
where
    I: IntoIterator<Item = &'a Publication>,
{
    let entries: Vec<&str> = publications
        .into_iter()
        .filter_map(|p| p.bibtex.as_deref())
        .collect();

    ExportBlob {
        file_name: EXPORT_FILE_NAME,
        media_type: EXPORT_MEDIA_TYPE,
        content: entries.join(ENTRY_SEPARATOR),
        entries: entries.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PublicationKind;

    const ENTRY_A: &str = "@article{a2024,\n  title={A},\n  year={2024}\n}";
    const ENTRY_B: &str = "@inproceedings{b2023,\n  title={B},\n  year={2023}\n}";

    fn with_entry(title: &str, entry: &str) -> Publication {
        Publication::new(title, "V", 2024, PublicationKind::Journal).with_bibtex(entry)
    }

    fn without_entry(title: &str) -> Publication {
        Publication::new(title, "V", 2024, PublicationKind::Preprint)
    }

    #[test]
    fn test_single_entry_has_no_separator_artifacts() {
        let pubs = [with_entry("A", ENTRY_A), without_entry("B")];
        let blob = export_bibtex(&pubs);
        assert_eq!(blob.content, ENTRY_A);
        assert_eq!(blob.entries, 1);
        assert!(!blob.content.starts_with('\n'));
        assert!(!blob.content.ends_with('\n'));
    }

    #[test]
    fn test_entries_joined_by_blank_line_in_order() {
        let pubs = [
            with_entry("A", ENTRY_A),
            without_entry("skip"),
            with_entry("B", ENTRY_B),
        ];
        let blob = export_bibtex(&pubs);
        assert_eq!(blob.content, format!("{}\n\n{}", ENTRY_A, ENTRY_B));
        assert_eq!(blob.entries, 2);
    }

    #[test]
    fn test_fixed_name_and_media_type() {
        let blob = export_bibtex(&[with_entry("A", ENTRY_A)]);
        assert_eq!(blob.file_name, "publications.bib");
        assert_eq!(blob.media_type, "text/plain");
        assert_eq!(blob.bytes(), ENTRY_A.as_bytes());
    }

    #[test]
    fn test_nothing_to_export() {
        let blob = export_bibtex(&[without_entry("A")]);
        assert!(blob.is_empty());
        assert_eq!(blob.content, "");

        let none: [Publication; 0] = [];
        assert!(export_bibtex(&none).is_empty());
    }

    #[test]
    fn test_write_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blob = export_bibtex(&[with_entry("A", ENTRY_A)]);
        let path = blob.write_to(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("publications.bib"));
        assert_eq!(fs::read_to_string(path).unwrap(), ENTRY_A);
    }

    #[test]
    fn test_write_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("cv").join("exports");
        let path = export_bibtex(&[without_entry("A")]).write_to(&nested).unwrap();
        assert_eq!(path, nested.join("publications.bib"));
        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }
}
