//! Text rendering of forms and entity tables.

use crate::core::form::FormBinder;
use crate::core::table::{DELETE, EDIT, EntityTable};
use crate::utils::formatting::{bold, italic, pad_right};
use crate::utils::table::Table;
use ansi_term::Colour;

/// One line per input: label, value, disabled marker and error message.
pub fn render_form(form: &FormBinder) -> String {
    let views: Vec<_> = form.fields().collect();
    let width = views.iter().map(|v| v.label.len()).max().unwrap_or(0);

    let mut out = String::new();
    for v in &views {
        let value = if v.value.is_empty() {
            italic("(empty)")
        } else {
            v.value.to_string()
        };
        out.push_str(&format!("{} : {}", bold(&pad_right(v.label, width)), value));
        if v.disabled {
            out.push_str(" [disabled]");
        }
        out.push('\n');
        if let Some(err) = v.error {
            out.push_str(&format!(
                "{}   {}\n",
                " ".repeat(width),
                Colour::Red.paint(err)
            ));
        }
    }
    out.push_str(&format!("[ {} ]  [ Cancel ]\n", form.button_label()));
    out
}

/// Headers always; Edit/Delete columns only when the table carries actions.
pub fn render_table(table: &EntityTable, max_cell_width: usize, separator: char) -> String {
    let mut out = Table::with_headers(&table.headers()).separator(separator);

    for row in table.rows() {
        let mut cells = row.cells.clone();
        if table.has_actions() {
            let ready = row.actions.is_some();
            cells.push(if ready { format!("[{EDIT}]") } else { String::new() });
            cells.push(if ready { format!("[{DELETE}]") } else { String::new() });
        }
        out.add_row(cells);
    }
    out.wrap(max_cell_width);
    out.render()
}
