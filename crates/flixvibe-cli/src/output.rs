use catalog_core::{Notice, NoticeKind, Notifier};
use catalog_models::ContentItem;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, modifiers::UTF8_ROUND_CORNERS, Attribute, Cell, Color, Table};
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => println!("{} {}", "✓".green(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "success", "message": msg.as_ref() }));
            }
        }
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        // Errors are shown even in quiet mode
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", "✗".red(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "error", "message": msg.as_ref() }));
            }
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => println!("{}", msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "info", "message": msg.as_ref() }));
            }
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => println!("{} {}", "⚠".yellow(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "warning", "message": msg.as_ref() }));
            }
        }
    }

    /// Print a table in human mode. Callers emit `json` for the other formats.
    pub fn table(&self, table: &Table) {
        if self.quiet || !self.is_human() {
            return;
        }
        println!("{}", table);
    }

    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet && self.format != OutputFormat::Human {
            return;
        }

        self.print_json(data);
    }

    /// Whether a command's result document should be printed after it ran.
    /// Human mode already showed a notice, and `-q` shows nothing.
    pub fn emits_results(&self) -> bool {
        !self.quiet && !self.is_human()
    }

    /// Print the outcome of a mutating command for JSON consumers.
    pub fn result(&self, data: &serde_json::Value) {
        if !self.emits_results() {
            return;
        }

        self.print_json(data);
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(data).unwrap_or_default()),
            OutputFormat::JsonPretty => println!("{}", serde_json::to_string_pretty(data).unwrap_or_default()),
            OutputFormat::Human => println!("{}", data),
        }
    }
}

/// Shows notices on the terminal, or drops them when disabled in config.
pub struct OutputNotifier<'a> {
    output: &'a Output,
    enabled: bool,
}

impl<'a> OutputNotifier<'a> {
    pub fn new(output: &'a Output, enabled: bool) -> Self {
        Self { output, enabled }
    }
}

impl Notifier for OutputNotifier<'_> {
    fn notify(&self, notice: &Notice) {
        tracing::debug!(kind = ?notice.kind, "notice: {}", notice.message);
        if !self.enabled {
            return;
        }

        match notice.kind {
            NoticeKind::Success => self.output.success(&notice.message),
            NoticeKind::Info => self.output.info(&notice.message),
            NoticeKind::Error => self.output.error(&notice.message),
        }
    }
}

pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_header(
        header
            .into_iter()
            .map(|h| Cell::new(h).fg(Color::Cyan).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

/// The standard catalog listing: one row per item.
pub fn content_table<'a>(items: impl IntoIterator<Item = &'a ContentItem>) -> Table {
    let mut table = new_table(vec!["ID", "Title", "Type", "Genre", "Year", "Rating", "Duration"]);
    for item in items {
        table.add_row(content_row(item));
    }
    table
}

pub fn content_row(item: &ContentItem) -> Vec<Cell> {
    vec![
        Cell::new(item.id),
        Cell::new(&item.title).add_attribute(Attribute::Bold),
        Cell::new(item.content_type.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string())),
        Cell::new(&item.genre),
        Cell::new(item.year),
        Cell::new(format!("★ {:.1}", item.rating)),
        Cell::new(&item.duration),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::Catalog;

    #[test]
    fn test_content_table_has_row_per_item() {
        let catalog = Catalog::seed();
        let table = content_table(catalog.items());
        assert_eq!(table.row_iter().count(), catalog.len());

        let rendered = table.to_string();
        assert!(rendered.contains("Cosmic Horizons"));
        assert!(rendered.contains("★ 9.1"));
    }

    #[test]
    fn test_results_only_emitted_for_json_consumers() {
        assert!(!Output::new(OutputFormat::Human, false).emits_results());
        assert!(!Output::new(OutputFormat::Human, true).emits_results());
        assert!(!Output::new(OutputFormat::Json, true).emits_results());
        assert!(!Output::new(OutputFormat::JsonPretty, true).emits_results());
        assert!(Output::new(OutputFormat::Json, false).emits_results());
        assert!(Output::new(OutputFormat::JsonPretty, false).emits_results());
    }

    #[test]
    fn test_output_format_value_names() {
        assert_eq!(OutputFormat::from_str("json-pretty", true).unwrap(), OutputFormat::JsonPretty);
        assert!(OutputFormat::from_str("yaml", true).is_err());
    }
}
