use comfy_table::{presets, ContentArrangement, Table};

use crate::db::paging::PagedList;

/// Render labeled rows, one per entity, from pre-formatted cells.
pub fn render_rows(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = new_table();
    table.set_header(headers.to_vec());
    for row in rows {
        table.add_row(row.clone());
    }
    table.to_string()
}

pub fn render_key_values(rows: &[(String, String)]) -> String {
    let mut table = new_table();
    table.set_header(vec!["Key", "Value"]);
    for (key, value) in rows {
        table.add_row(vec![key.clone(), value.clone()]);
    }
    table.to_string()
}

/// Footer line describing a page's position within the full result.
pub fn paging_footer<T>(page: &PagedList<T>) -> String {
    format!(
        "Page {} of {} ({} rows total){}",
        page.page_index + 1,
        page.total_pages.max(1),
        page.total_count,
        if page.has_next_page() {
            ", more available"
        } else {
            ""
        }
    )
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}
