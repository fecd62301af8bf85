use super::{fill_form, parse_assignments, report};
use crate::backend::Backend;
use crate::cli::parser::Commands;
use crate::core::pages::EditPage;
use crate::core::routes::RouteTable;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::catalog;
use crate::ui::messages::header;
use crate::ui::render::render_form;

pub fn handle(cmd: &Commands, backend: &dyn Backend) -> AppResult<()> {
    let Commands::Edit { entity, key, set } = cmd else {
        return Ok(());
    };

    let kind = catalog::find(entity)?;
    let assignments = parse_assignments(set)?;

    let session = Session::start(backend);
    RouteTable::default().resolve(&kind.edit_route(key), session.user())?;

    let mut page = EditPage::load(backend, kind, key);
    let Some(form) = page.form_mut() else {
        return Err(AppError::Other(format!(
            "could not load {} {key}",
            kind.display
        )));
    };
    fill_form(form, &assignments)?;

    match page.submit() {
        Ok(outcome) => report(&outcome),
        Err(AppError::Validation(errors)) => {
            header(page.heading());
            if let Some(form) = page.form() {
                print!("{}", render_form(form));
            }
            Err(AppError::Validation(errors))
        }
        Err(e) => Err(e),
    }
}
