use crate::commands::AppContext;
use crate::output::{new_table, Output};
use crate::NotificationCommands;
use catalog_core::{Catalog, NotificationReadStore};
use color_eyre::Result;
use comfy_table::Cell;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Serialize)]
struct FeedEntry {
    id: u32,
    message: String,
    read: bool,
}

/// New-release notices: one per title from the newest catalog year, keyed
/// by the title's id.
fn feed_ids(catalog: &Catalog) -> Vec<(u32, String)> {
    let Some(newest) = catalog.items().iter().map(|item| item.year).max() else {
        return Vec::new();
    };

    catalog
        .items()
        .iter()
        .filter(|item| item.year == newest)
        .map(|item| (item.id, format!("New release: \"{}\" is now streaming", item.title)))
        .collect()
}

pub fn run_notifications(ctx: &AppContext, cmd: NotificationCommands, output: &Output) -> Result<()> {
    let store = NotificationReadStore::new(ctx.storage.clone(), &ctx.keys);
    let feed = feed_ids(&ctx.catalog);
    let ids: Vec<u32> = feed.iter().map(|(id, _)| *id).collect();

    let ensure_known = |id: u32| {
        if ids.contains(&id) {
            Ok(())
        } else {
            Err(color_eyre::eyre::eyre!("No notification with id {}", id))
        }
    };

    match cmd {
        NotificationCommands::Show => {
            let read = store.load();
            let entries: Vec<FeedEntry> = feed
                .into_iter()
                .map(|(id, message)| FeedEntry {
                    id,
                    message,
                    read: read.contains(&id),
                })
                .collect();
            let unread = store.unread_count(&ids);

            if !output.is_human() {
                output.json(&json!({ "unread": unread, "notifications": entries }));
                return Ok(());
            }

            let mut table = new_table(vec!["ID", "", "Notification"]);
            for entry in &entries {
                let marker = if entry.read { " ".to_string() } else { "●".cyan().to_string() };
                table.add_row(vec![Cell::new(entry.id), Cell::new(marker), Cell::new(&entry.message)]);
            }
            output.table(&table);
            output.info(format!("{} unread", unread));
        }
        NotificationCommands::Read { id } => {
            ensure_known(id)?;
            if store.mark_read(id)? {
                output.success(format!("Notification {} marked as read", id));
            } else {
                output.info(format!("Notification {} was already read", id));
            }
        }
        NotificationCommands::Unread { id } => {
            ensure_known(id)?;
            if store.mark_unread(id)? {
                output.success(format!("Notification {} marked as unread", id));
            } else {
                output.info(format!("Notification {} was already unread", id));
            }
        }
        NotificationCommands::ReadAll => {
            let marked = store.mark_all_read(ids.iter().copied())?;
            output.success(format!("Marked {} notification(s) as read", marked));
        }
    }

    Ok(())
}
