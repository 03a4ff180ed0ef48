//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use varfill::Unresolved;

/// Format unresolved placeholders as an ASCII table.
pub fn format_unresolved_table(unresolved: &[Unresolved]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Placeholder", "Reason", "Did you mean"]);

    for item in unresolved {
        let reason = if item.beyond_depth {
            "nested beyond --max-depth"
        } else {
            "no data"
        };
        table.add_row(vec![
            item.name.clone(),
            reason.to_string(),
            item.suggestions.join(", "),
        ]);
    }

    table
}
