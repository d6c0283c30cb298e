use crate::commands::browse::criteria_from_args;
use crate::commands::AppContext;
use crate::output::{content_row, new_table, Output};
use crate::{FilterArgs, MyListCommands};
use catalog_core::MyListStore;
use catalog_models::SortKey;
use color_eyre::Result;
use comfy_table::Cell;
use serde_json::json;

pub fn run_mylist(ctx: &AppContext, cmd: MyListCommands, output: &Output) -> Result<()> {
    let store = MyListStore::new(ctx.storage.clone(), &ctx.keys);

    match cmd {
        MyListCommands::List { query, filters } => list(&store, query.as_deref(), &filters, output),
        MyListCommands::Toggle { id } => {
            let item = ctx
                .catalog
                .get(id)
                .ok_or_else(|| color_eyre::eyre::eyre!("No title with id {} in the catalog", id))?;
            let added = store.toggle_item(item, &ctx.notifier(output))?;
            output.result(&json!({ "id": id, "added": added }));
            Ok(())
        }
        MyListCommands::Remove { id } => {
            if store.remove_item(id, &ctx.notifier(output))?.is_none() {
                output.warn(format!("Title {} is not on your list", id));
            }
            Ok(())
        }
    }
}

fn list(store: &MyListStore, query: Option<&str>, filters: &FilterArgs, output: &Output) -> Result<()> {
    // My List defaults to newest first rather than the configured catalog sort
    let criteria = criteria_from_args(query, filters, &SortKey::DateAdded)?;
    let entries = store.listing(&criteria);

    if !output.is_human() {
        output.json(&json!({
            "criteria": criteria,
            "count": entries.len(),
            "entries": entries,
        }));
        return Ok(());
    }

    if entries.is_empty() {
        if store.load().is_empty() {
            output.info("Your list is empty. Add titles with 'flixvibe mylist toggle <id>'.");
        } else {
            output.warn("No saved titles match your filters.");
        }
        return Ok(());
    }

    let mut table = new_table(vec!["ID", "Title", "Type", "Genre", "Year", "Rating", "Duration", "Added"]);
    for entry in &entries {
        let mut row = content_row(&entry.item);
        row.push(Cell::new(entry.added_at.format("%Y-%m-%d")));
        table.add_row(row);
    }
    output.table(&table);
    output.info(format!("{} saved title(s)", entries.len()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{memory_context, quiet_output};

    #[test]
    fn test_toggle_then_remove() {
        let ctx = memory_context();
        let output = quiet_output();
        let store = MyListStore::new(ctx.storage.clone(), &ctx.keys);

        run_mylist(&ctx, MyListCommands::Toggle { id: 7 }, &output).unwrap();
        assert!(store.contains(7));

        run_mylist(&ctx, MyListCommands::Remove { id: 7 }, &output).unwrap();
        assert!(!store.contains(7));

        // Removing again only warns
        assert!(run_mylist(&ctx, MyListCommands::Remove { id: 7 }, &output).is_ok());
        assert!(run_mylist(&ctx, MyListCommands::Toggle { id: 99 }, &output).is_err());
    }
}
