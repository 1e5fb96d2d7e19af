//! Text filtering shared by the catalog and search pages.

use crate::models::{CatalogEntry, SearchResult};

/// A record that can be matched against a free-text query.
pub trait Searchable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn subjects(&self) -> &[String];

    /// Case-insensitive substring match on title, author or any subject.
    /// An empty query matches everything.
    fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.title().to_lowercase().contains(&query)
            || self.author().to_lowercase().contains(&query)
            || self
                .subjects()
                .iter()
                .any(|s| s.to_lowercase().contains(&query))
    }
}

impl Searchable for CatalogEntry {
    fn title(&self) -> &str {
        &self.title
    }
    fn author(&self) -> &str {
        &self.author
    }
    fn subjects(&self) -> &[String] {
        &self.subjects
    }
}

impl Searchable for SearchResult {
    fn title(&self) -> &str {
        &self.title
    }
    fn author(&self) -> &str {
        &self.author
    }
    fn subjects(&self) -> &[String] {
        &self.subjects
    }
}

/// Items matching `query`, in their original order.
pub fn filter<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    items.iter().filter(|item| item.matches(query)).cloned().collect()
}

/// Results matching `query`, most relevant first (ties broken by id).
pub fn rank(results: &[SearchResult], query: &str) -> Vec<SearchResult> {
    let mut hits = filter(results, query);
    hits.sort_by(|a, b| b.relevance.cmp(&a.relevance).then(a.id.cmp(&b.id)));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_empty_query_matches_all() {
        let config = AppConfig::bundled().unwrap();
        assert_eq!(filter(&config.catalog, "").len(), 2);
        assert_eq!(filter(&config.catalog, "   ").len(), 2);
    }

    #[test]
    fn test_filter_by_title_author_subject() {
        let config = AppConfig::bundled().unwrap();

        let by_title = filter(&config.catalog, "digital");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, 2);

        let by_author = filter(&config.catalog, "JOHN doe");
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].id, 1);

        assert_eq!(filter(&config.catalog, "information").len(), 2);
        assert!(filter(&config.catalog, "astronomy").is_empty());
    }

    #[test]
    fn test_rank_orders_by_relevance() {
        let mut results = AppConfig::bundled().unwrap().search;
        results.reverse();
        let ranked = rank(&results, "");
        assert_eq!(ranked[0].relevance, 98);
        assert_eq!(ranked[1].relevance, 95);

        let ranked = rank(&results, "smith");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].author, "Jane Smith");
    }

    #[test]
    fn test_rank_breaks_ties_by_id() {
        let mut results = AppConfig::bundled().unwrap().search;
        for r in &mut results {
            r.relevance = 50;
        }
        results.reverse();
        let ranked = rank(&results, "");
        assert_eq!(ranked[0].id, 1);
        assert_eq!(ranked[1].id, 2);
    }
}
