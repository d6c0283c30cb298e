use crate::commands::browse::history_store;
use crate::commands::AppContext;
use crate::output::{new_table, Output};
use crate::HistoryCommands;
use color_eyre::Result;
use comfy_table::Cell;
use serde_json::json;

pub fn run_history(ctx: &AppContext, cmd: HistoryCommands, output: &Output) -> Result<()> {
    let store = history_store(ctx);

    match cmd {
        HistoryCommands::List => {
            let history = store.load();
            if !output.is_human() {
                output.json(&json!({ "limit": store.limit(), "searches": history }));
            } else if history.is_empty() {
                output.info("No recent searches");
            } else {
                let mut table = new_table(vec!["#", "Recent Searches"]);
                for (i, query) in history.iter().enumerate() {
                    table.add_row(vec![Cell::new(i + 1), Cell::new(query)]);
                }
                output.table(&table);
            }
            Ok(())
        }
        HistoryCommands::Clear => {
            store.clear(&ctx.notifier(output))?;
            Ok(())
        }
    }
}
