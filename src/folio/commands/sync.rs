//! Publication sync.
//!
//! Fetches a complete list from a [`PublicationSource`] and swaps it into the
//! store. Either the whole list is applied or nothing is:
//!
//! 1. Fetch fails → store untouched, error returned.
//! 2. Fetched list is malformed (duplicate titles, ...) → store untouched, error returned.
//! 3. Otherwise → store replaced wholesale.
//!
//! Overlapping syncs cannot happen: `run` needs the store mutably for its whole
//! duration.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Publication;
use crate::source::PublicationSource;
use crate::store::RecordStore;

pub fn run<P>(store: &mut RecordStore<Publication>, source: &P) -> Result<CmdResult>
where
    P: PublicationSource + ?Sized,
{
    let name = source.name();
    tracing::info!(source = %name, "syncing publications");

    let fetched = source.fetch_publications().inspect_err(|e| {
        tracing::warn!(source = %name, "sync failed, keeping current publications: {}", e);
    })?;
    let previous = store.len();
    store.replace(fetched).inspect_err(|e| {
        tracing::warn!(source = %name, "sync rejected, keeping current publications: {}", e);
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Synced {} publication{} from {}",
        store.len(),
        if store.len() == 1 { "" } else { "s" },
        name
    )));
    if previous != store.len() {
        result.add_message(CmdMessage::info(format!(
            "Previously {} publication{}",
            previous,
            if previous == 1 { "" } else { "s" }
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;
    use crate::model::PublicationKind;
    use crate::source::FallbackSource;
    use crate::store::fixtures::scenario_publications;
    use std::cell::Cell;

    struct FailingSource;

    impl PublicationSource for FailingSource {
        fn name(&self) -> String {
            "failing".to_string()
        }

        fn fetch_publications(&self) -> Result<Vec<Publication>> {
            Err(FolioError::Sync("registry unreachable".to_string()))
        }
    }

    struct FixedSource {
        publications: Vec<Publication>,
        calls: Cell<usize>,
    }

    impl PublicationSource for FixedSource {
        fn name(&self) -> String {
            "fixed".to_string()
        }

        fn fetch_publications(&self) -> Result<Vec<Publication>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.publications.clone())
        }
    }

    #[test]
    fn test_sync_replaces_store() {
        let mut store = RecordStore::new(scenario_publications()).unwrap();
        let result = run(&mut store, &FallbackSource).unwrap();
        assert_eq!(store.len(), 4);
        assert!(store.get("A").is_none());
        assert!(result.messages[0].content.contains("Synced 4 publications"));
        assert!(result.messages[1].content.contains("Previously 3"));
    }

    #[test]
    fn test_failed_fetch_keeps_store() {
        let mut store = RecordStore::new(scenario_publications()).unwrap();
        let before = store.clone();
        let err = run(&mut store, &FailingSource).unwrap_err();
        assert!(matches!(err, FolioError::Sync(_)));
        assert_eq!(store, before);
    }

    #[test]
    fn test_malformed_fetch_keeps_store() {
        let mut store = RecordStore::new(scenario_publications()).unwrap();
        let before = store.clone();
        let dupes = FixedSource {
            publications: vec![
                Publication::new("Same", "V", 2024, PublicationKind::Journal),
                Publication::new("Same", "V", 2023, PublicationKind::Journal),
            ],
            calls: Cell::new(0),
        };
        assert!(run(&mut store, &dupes).is_err());
        assert_eq!(store, before);
        assert_eq!(dupes.calls.get(), 1);
    }

    #[test]
    fn test_sync_through_trait_object() {
        let mut store = RecordStore::empty();
        let source: Box<dyn PublicationSource> = Box::new(FixedSource {
            publications: scenario_publications(),
            calls: Cell::new(0),
        });
        let result = run(&mut store, source.as_ref()).unwrap();
        assert_eq!(store.len(), 3);
        assert!(!result.has_errors());
    }
}
