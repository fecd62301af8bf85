use crate::backend::Backend;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pages::IndexPage;
use crate::core::routes::RouteTable;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export;
use crate::models::catalog;
use crate::ui::messages::{header, info};
use crate::ui::render::render_table;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config, backend: &dyn Backend) -> AppResult<()> {
    let Commands::List {
        entity,
        format,
        file,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let kind = catalog::find(entity)?;
    let session = Session::start(backend);
    RouteTable::default().resolve(&kind.index_route(), session.user())?;

    let page = IndexPage::load(backend, kind, session.user());

    header(page.heading());
    if let Some((label, route)) = page.create_link() {
        info(format!("{label}: {route}"));
    }
    print!(
        "{}",
        render_table(&page.table(), cfg.max_cell_width, cfg.separator_char)
    );

    if let (Some(fmt), Some(path)) = (format, file) {
        export::export(kind, page.records(), *fmt, &expand_tilde(path), *force)?;
    }

    Ok(())
}
