use super::{fill_form, parse_assignments, report};
use crate::backend::Backend;
use crate::cli::parser::Commands;
use crate::core::pages::CreatePage;
use crate::core::routes::RouteTable;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::catalog;
use crate::ui::messages::header;
use crate::ui::render::render_form;

pub fn handle(cmd: &Commands, backend: &dyn Backend) -> AppResult<()> {
    let Commands::Create { entity, set } = cmd else {
        return Ok(());
    };

    let kind = catalog::find(entity)?;
    let assignments = parse_assignments(set)?;

    let session = Session::start(backend);
    RouteTable::default().resolve(&kind.create_route(), session.user())?;

    let mut page = CreatePage::new(backend, kind)?;
    fill_form(page.form_mut(), &assignments)?;

    match page.submit() {
        Ok(outcome) => report(&outcome),
        Err(AppError::Validation(errors)) => {
            header(page.heading());
            print!("{}", render_form(page.form()));
            Err(AppError::Validation(errors))
        }
        Err(e) => Err(e),
    }
}
