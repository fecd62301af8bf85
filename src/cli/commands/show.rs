use crate::backend::Backend;
use crate::cli::parser::Commands;
use crate::core::pages::fetch_one;
use crate::core::routes::RouteTable;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::catalog;
use crate::ui::messages::header;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, backend: &dyn Backend) -> AppResult<()> {
    let Commands::Show { entity, key } = cmd else {
        return Ok(());
    };

    let kind = catalog::find(entity)?;
    let session = Session::start(backend);
    RouteTable::default().resolve(&kind.index_route(), session.user())?;

    let record = fetch_one(backend, kind, key)?;

    header(format!("{} {}", kind.display, key));
    let mut t = Table::with_headers(&["FIELD", "VALUE"]);
    for f in kind.table_fields() {
        t.add_row(vec![f.label.to_string(), record.text(f.name).unwrap_or_default()]);
    }
    print!("{}", t.render());
    Ok(())
}
