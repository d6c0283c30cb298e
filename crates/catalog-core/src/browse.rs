use crate::catalog::{apply, Catalog};
use crate::error::Result;
use crate::history::SearchHistoryStore;
use crate::notify::{messages, Notice, Notifier};
use catalog_models::{ContentItem, ContentType, FilterCriteria, GenreFilter, SortKey};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowseState {
    /// No query: suggestions and recent searches are shown.
    Browsing,
    /// Non-empty query: filtered results are shown.
    Searching,
}

/// One browsing page: a catalog plus the criteria the user has picked.
///
/// Results are recomputed on demand from the current criteria, so every
/// setter is immediately reflected in [`BrowseSession::results`].
pub struct BrowseSession {
    items: Vec<ContentItem>,
    criteria: FilterCriteria,
}

impl BrowseSession {
    pub fn new(catalog: &Catalog) -> Self {
        Self::with_criteria(catalog, FilterCriteria::default())
    }

    pub fn with_criteria(catalog: &Catalog, criteria: FilterCriteria) -> Self {
        Self {
            items: catalog.items().to_vec(),
            criteria,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn state(&self) -> BrowseState {
        if self.criteria.has_query() {
            BrowseState::Searching
        } else {
            BrowseState::Browsing
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> BrowseState {
        let before = self.state();
        self.criteria.query = query.into();
        let after = self.state();
        if before != after {
            debug!("Browse state {:?} -> {:?}", before, after);
        }
        after
    }

    pub fn set_genre(&mut self, genre: impl Into<GenreFilter>) {
        self.criteria.genre = genre.into();
    }

    pub fn set_sort(&mut self, sort_key: SortKey) {
        self.criteria.sort_key = sort_key;
    }

    pub fn set_content_type(&mut self, content_type: Option<ContentType>) {
        self.criteria.content_type = content_type;
    }

    /// Back to the default criteria, which also returns to `Browsing`.
    pub fn clear_filters(&mut self, notifier: &dyn Notifier) {
        self.criteria = FilterCriteria::default();
        notifier.notify(&Notice::info(messages::FILTERS_CLEARED));
    }

    /// Submit the current query to `history`. Announces the search only when
    /// it added a new history entry.
    pub fn submit(&self, history: &SearchHistoryStore, notifier: &dyn Notifier) -> Result<Vec<String>> {
        let query = self.criteria.query.trim();
        if query.is_empty() {
            return Ok(history.load());
        }

        let is_new = !history.contains(query);
        let updated = history.record(query)?;
        if is_new {
            notifier.notify(&Notice::success(messages::searching_for(query)));
        }
        Ok(updated)
    }

    /// Re-run a past search: sets the query and submits it.
    pub fn select_recent(
        &mut self,
        query: &str,
        history: &SearchHistoryStore,
        notifier: &dyn Notifier,
    ) -> Result<Vec<String>> {
        self.set_query(query);
        self.submit(history, notifier)
    }

    /// Matching items while `Searching`; empty while `Browsing`.
    pub fn results(&self) -> Vec<ContentItem> {
        match self.state() {
            BrowseState::Browsing => Vec::new(),
            BrowseState::Searching => apply(&self.items, &self.criteria),
        }
    }

    /// The `n` most popular items, shown while `Browsing`.
    pub fn suggestions(&self, n: usize) -> Vec<ContentItem> {
        let mut items = apply(&self.items, &FilterCriteria::default());
        items.truncate(n);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::StorageKeys;
    use crate::notify::{NoticeKind, RecordingNotifier};
    use crate::storage::MemoryStore;

    fn history() -> SearchHistoryStore {
        SearchHistoryStore::with_default_limit(MemoryStore::shared(), &StorageKeys::default())
    }

    #[test]
    fn test_state_follows_query() {
        let mut session = BrowseSession::new(&Catalog::seed());
        assert_eq!(session.state(), BrowseState::Browsing);
        assert!(session.results().is_empty());

        assert_eq!(session.set_query("quest"), BrowseState::Searching);
        assert_eq!(session.results().len(), 1);

        assert_eq!(session.set_query("   "), BrowseState::Browsing);
        assert!(session.results().is_empty());
    }

    #[test]
    fn test_results_track_every_change() {
        let mut session = BrowseSession::new(&Catalog::seed());
        session.set_query("a");
        let all = session.results().len();

        session.set_genre("drama");
        assert!(session.results().iter().all(|item| item.genre == "drama"));

        session.set_content_type(Some(ContentType::Movie));
        assert!(session.results().is_empty());

        session.set_genre("all");
        session.set_content_type(None);
        assert_eq!(session.results().len(), all);
    }

    #[test]
    fn test_clear_filters_resets_and_announces() {
        let mut session = BrowseSession::new(&Catalog::seed());
        let notifier = RecordingNotifier::new();
        session.set_query("zzz_no_match");
        session.set_genre("action");
        session.set_sort(SortKey::Title);

        session.clear_filters(&notifier);
        assert_eq!(session.criteria(), &FilterCriteria::default());
        assert_eq!(session.state(), BrowseState::Browsing);
        assert_eq!(notifier.messages(), vec!["All filters cleared"]);
    }

    #[test]
    fn test_submit_records_and_announces_new_queries_only() {
        let mut session = BrowseSession::new(&Catalog::seed());
        let history = history();
        let notifier = RecordingNotifier::new();

        session.set_query("  Neon  ");
        assert_eq!(session.submit(&history, &notifier).unwrap(), vec!["Neon"]);
        session.submit(&history, &notifier).unwrap();

        assert_eq!(notifier.messages(), vec!["Searching for \"Neon\""]);
        assert_eq!(notifier.last().unwrap().kind, NoticeKind::Success);
        assert_eq!(history.load(), vec!["Neon"]);
    }

    #[test]
    fn test_submit_empty_query_writes_nothing() {
        let session = BrowseSession::new(&Catalog::seed());
        let history = history();
        let notifier = RecordingNotifier::new();

        assert!(session.submit(&history, &notifier).unwrap().is_empty());
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_select_recent_reruns_search() {
        let mut session = BrowseSession::new(&Catalog::seed());
        let history = history();
        history.record("cosmic").unwrap();
        history.record("drama").unwrap();
        let notifier = RecordingNotifier::new();

        let updated = session.select_recent("cosmic", &history, &notifier).unwrap();
        assert_eq!(updated, vec!["drama", "cosmic"]);
        assert_eq!(session.state(), BrowseState::Searching);
        assert_eq!(session.results()[0].title, "Cosmic Horizons");
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_suggestions_are_most_popular() {
        let session = BrowseSession::new(&Catalog::seed());
        let titles: Vec<String> = session.suggestions(2).into_iter().map(|item| item.title).collect();
        assert_eq!(titles, vec!["Cosmic Horizons", "The Midnight Quest"]);
    }
}
