use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::{KeyKind, ValueKind, catalog};
use crate::ui::messages::header;
use crate::utils::table::Table;

fn kind_name(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Text => "text",
        ValueKind::Boolean => "boolean",
        ValueKind::Timestamp => "timestamp",
        ValueKind::Integer => "integer",
    }
}

pub fn handle(cmd: &Commands) -> AppResult<()> {
    let Commands::Entities { entity } = cmd else {
        return Ok(());
    };

    match entity {
        None => {
            let mut t = Table::with_headers(&["NAME", "DISPLAY", "API", "ROUTE", "KEY"]);
            for kind in catalog::ALL {
                t.add_row(vec![
                    kind.name.to_string(),
                    kind.display.to_string(),
                    kind.api_base(),
                    kind.index_route(),
                    kind.key.name.to_string(),
                ]);
            }
            print!("{}", t.render());
        }
        Some(name) => {
            let kind = catalog::find(name)?;
            header(kind.plural);
            let mut t = Table::with_headers(&["FIELD", "LABEL", "TYPE", "RULES"]);
            for f in kind.table_fields() {
                let rules = if f.name == kind.key.name {
                    match kind.key_kind {
                        KeyKind::Generated => "key, assigned by backend".to_string(),
                        KeyKind::Natural => format!("key, {}", f.describe_rules()),
                    }
                } else {
                    f.describe_rules()
                };
                t.add_row(vec![
                    f.name.to_string(),
                    f.label.to_string(),
                    kind_name(f.kind).to_string(),
                    rules,
                ]);
            }
            print!("{}", t.render());
        }
    }
    Ok(())
}
