use super::prompts;
use crate::commands::AppContext;
use crate::output::{content_table, Output};
use crate::WatchlistCommands;
use catalog_core::WatchlistStore;
use color_eyre::Result;
use serde_json::json;

pub fn run_watchlist(ctx: &AppContext, cmd: WatchlistCommands, output: &Output) -> Result<()> {
    let store = WatchlistStore::new(ctx.storage.clone(), &ctx.keys);

    match cmd {
        WatchlistCommands::List => list(ctx, &store, output),
        WatchlistCommands::Toggle { id } => toggle(ctx, &store, id, output),
        WatchlistCommands::Clear { yes } => {
            if !yes && !prompts::confirm("Remove every title from your watchlist?", false)? {
                output.info("Watchlist left unchanged");
                return Ok(());
            }
            store.clear()?;
            output.success("Watchlist cleared");
            Ok(())
        }
    }
}

fn list(ctx: &AppContext, store: &WatchlistStore, output: &Output) -> Result<()> {
    let (items, unknown) = store.resolve(&ctx.catalog);

    if !output.is_human() {
        output.json(&json!({
            "count": items.len() + unknown.len(),
            "items": items,
            "unknown_ids": unknown,
        }));
        return Ok(());
    }

    if items.is_empty() && unknown.is_empty() {
        output.info("Your watchlist is empty. Add titles with 'flixvibe watchlist toggle <id>'.");
        return Ok(());
    }

    output.table(&content_table(&items));
    if !unknown.is_empty() {
        let ids: Vec<String> = unknown.iter().map(|id| id.to_string()).collect();
        output.warn(format!("Not in the current catalog: {}", ids.join(", ")));
    }
    Ok(())
}

fn toggle(ctx: &AppContext, store: &WatchlistStore, id: u32, output: &Output) -> Result<()> {
    let notifier = ctx.notifier(output);

    let toggle = match ctx.catalog.get(id) {
        Some(item) => store.toggle_item(item, &notifier)?,
        None => {
            // Ids outside the catalog can still be removed
            if !store.contains(id) {
                return Err(color_eyre::eyre::eyre!("No title with id {} in the catalog", id));
            }
            let toggle = store.toggle(id)?;
            output.success(format!("Removed unknown id {} from watchlist", id));
            toggle
        }
    };

    output.result(&json!({
        "id": id,
        "added": toggle.was_added,
        "watchlist": toggle.ids,
    }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{memory_context, quiet_output};

    #[test]
    fn test_toggle_known_and_unknown_ids() {
        let ctx = memory_context();
        let output = quiet_output();
        let store = WatchlistStore::new(ctx.storage.clone(), &ctx.keys);

        run_watchlist(&ctx, WatchlistCommands::Toggle { id: 5 }, &output).unwrap();
        assert!(store.contains(5));

        assert!(run_watchlist(&ctx, WatchlistCommands::Toggle { id: 404 }, &output).is_err());
        assert!(!store.contains(404));
    }

    #[test]
    fn test_toggle_in_human_and_quiet_modes() {
        use crate::output::OutputFormat;

        let ctx = memory_context();
        let store = WatchlistStore::new(ctx.storage.clone(), &ctx.keys);

        for output in [
            Output::new(OutputFormat::Human, false),
            Output::new(OutputFormat::Human, true),
            Output::new(OutputFormat::Json, true),
        ] {
            assert!(!output.emits_results());
            run_watchlist(&ctx, WatchlistCommands::Toggle { id: 2 }, &output).unwrap();
        }
        // Three toggles leave the title saved
        assert!(store.contains(2));
    }

    #[test]
    fn test_clear_with_yes_skips_prompt() {
        let ctx = memory_context();
        let output = quiet_output();
        let store = WatchlistStore::new(ctx.storage.clone(), &ctx.keys);
        store.toggle(1).unwrap();

        run_watchlist(&ctx, WatchlistCommands::Clear { yes: true }, &output).unwrap();
        assert!(store.load().is_empty());
    }
}
