use super::report;
use crate::backend::Backend;
use crate::cli::parser::Commands;
use crate::core::pages::IndexPage;
use crate::core::role::ROLE_ADMIN;
use crate::core::routes::RouteTable;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::catalog;
use crate::ui::messages::{info, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, backend: &dyn Backend) -> AppResult<()> {
    let Commands::Delete { entity, key, yes } = cmd else {
        return Ok(());
    };

    let kind = catalog::find(entity)?;
    let session = Session::start(backend);
    RouteTable::default().resolve(&kind.index_route(), session.user())?;

    if !session.has_role(ROLE_ADMIN) {
        return Err(AppError::Forbidden(
            kind.edit_route_template(),
            ROLE_ADMIN.to_string(),
        ));
    }

    let mut page = IndexPage::load(backend, kind, session.user());
    let row = page
        .row_of(key)
        .ok_or_else(|| AppError::Other(format!("{} {key} not found", kind.display)))?;

    if !*yes && !ask_confirmation(&format!("Delete {} {key}?", kind.display)) {
        info("Operation cancelled.");
        return Ok(());
    }

    let outcome = page.delete(row)?;
    report(&outcome)?;
    info(format!("{} {} remaining", page.records().len(), page.heading()));
    Ok(())
}
