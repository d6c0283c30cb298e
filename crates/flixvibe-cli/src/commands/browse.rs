use crate::commands::AppContext;
use crate::output::{content_table, new_table, Output};
use crate::FilterArgs;
use catalog_core::{BrowseSession, BrowseState, SearchHistoryStore};
use catalog_models::{ContentType, FilterCriteria, SortKey};
use color_eyre::Result;
use comfy_table::Cell;
use serde_json::json;

/// Map listing flags onto criteria. A missing sort falls back to `default_sort`.
pub fn criteria_from_args(query: Option<&str>, filters: &FilterArgs, default_sort: &SortKey) -> Result<FilterCriteria> {
    let content_type = filters
        .content_type
        .as_deref()
        .map(|raw| raw.parse::<ContentType>().map_err(|e| color_eyre::eyre::eyre!(e)))
        .transpose()?;

    let sort_key = filters
        .sort
        .as_deref()
        .map(SortKey::from)
        .unwrap_or_else(|| default_sort.clone());
    if let SortKey::Unrecognized(raw) = &sort_key {
        tracing::warn!("Unknown sort order {:?}, results keep catalog order", raw);
    }

    Ok(FilterCriteria::new()
        .with_query(query.unwrap_or_default())
        .with_genre(filters.genre.as_deref().unwrap_or("all"))
        .with_sort(sort_key)
        .with_content_type(content_type))
}

fn has_filters(filters: &FilterArgs) -> bool {
    filters.genre.is_some() || filters.content_type.is_some() || filters.sort.is_some()
}

pub fn history_store(ctx: &AppContext) -> SearchHistoryStore {
    SearchHistoryStore::new(ctx.storage.clone(), &ctx.keys, ctx.config.search.history_limit)
}

pub fn run_browse(
    ctx: &AppContext,
    query: Option<String>,
    filters: FilterArgs,
    limit: Option<usize>,
    output: &Output,
) -> Result<()> {
    let criteria = criteria_from_args(query.as_deref(), &filters, &ctx.config.search.default_sort)?;
    let session = BrowseSession::with_criteria(&ctx.catalog, criteria);

    match session.state() {
        BrowseState::Searching => print_results(session.results(), session.criteria(), output),
        // Filters without a query list the whole catalog through them
        BrowseState::Browsing if has_filters(&filters) => {
            print_results(ctx.catalog.search(session.criteria()), session.criteria(), output)
        }
        BrowseState::Browsing => {
            let suggestions = session.suggestions(limit.unwrap_or(ctx.config.search.suggestions));
            let recent = history_store(ctx).load();

            if output.is_human() {
                if !recent.is_empty() {
                    let mut table = new_table(vec!["Recent Searches"]);
                    for query in &recent {
                        table.add_row(vec![Cell::new(query)]);
                    }
                    output.table(&table);
                }
                output.info("Popular right now:");
                output.table(&content_table(&suggestions));
                output.info(format!("Genres: {}", ctx.catalog.genres().join(", ")));
            } else {
                output.json(&json!({
                    "state": BrowseState::Browsing,
                    "recent_searches": recent,
                    "suggestions": suggestions,
                    "genres": ctx.catalog.genres(),
                }));
            }
            Ok(())
        }
    }
}

pub fn run_search(ctx: &AppContext, query: &str, filters: FilterArgs, output: &Output) -> Result<()> {
    let criteria = criteria_from_args(Some(query), &filters, &ctx.config.search.default_sort)?;
    let session = BrowseSession::with_criteria(&ctx.catalog, criteria);

    let notifier = ctx.notifier(output);
    session.submit(&history_store(ctx), &notifier)?;

    print_results(session.results(), session.criteria(), output)
}

fn print_results(results: Vec<catalog_models::ContentItem>, criteria: &FilterCriteria, output: &Output) -> Result<()> {
    if !output.is_human() {
        output.json(&json!({
            "state": if criteria.has_query() { BrowseState::Searching } else { BrowseState::Browsing },
            "criteria": criteria,
            "count": results.len(),
            "results": results,
        }));
        return Ok(());
    }

    if results.is_empty() {
        output.warn("No results found. Try adjusting your search or filters.");
        return Ok(());
    }

    output.table(&content_table(&results));
    output.info(format!("{} result(s)", results.len()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{memory_context, quiet_output};

    #[test]
    fn test_criteria_from_args() {
        let filters = FilterArgs {
            genre: Some("drama".to_string()),
            content_type: Some("TV Show".to_string()),
            sort: None,
        };
        let criteria = criteria_from_args(Some("crown"), &filters, &SortKey::Rating).unwrap();
        assert_eq!(criteria.query, "crown");
        assert_eq!(criteria.genre.to_string(), "drama");
        assert_eq!(criteria.content_type, Some(ContentType::Series));
        assert_eq!(criteria.sort_key, SortKey::Rating);
    }

    #[test]
    fn test_criteria_rejects_unknown_type() {
        let filters = FilterArgs {
            content_type: Some("podcast".to_string()),
            ..FilterArgs::default()
        };
        assert!(criteria_from_args(None, &filters, &SortKey::Popularity).is_err());
    }

    #[test]
    fn test_search_records_history() {
        let ctx = memory_context();
        let output = quiet_output();

        run_search(&ctx, "  neon ", FilterArgs::default(), &output).unwrap();
        run_search(&ctx, "neon", FilterArgs::default(), &output).unwrap();
        assert_eq!(history_store(&ctx).load(), vec!["neon"]);
    }

    #[test]
    fn test_browse_does_not_record_history() {
        let ctx = memory_context();
        let output = quiet_output();

        run_browse(&ctx, Some("neon".to_string()), FilterArgs::default(), None, &output).unwrap();
        run_browse(&ctx, None, FilterArgs::default(), Some(2), &output).unwrap();
        assert!(history_store(&ctx).load().is_empty());
    }
}
