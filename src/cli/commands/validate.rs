use super::{fill_form, parse_assignments};
use crate::backend::{ApiRequest, Method};
use crate::cli::parser::Commands;
use crate::core::form::{FormBinder, Submission};
use crate::core::pages::{UPDATE_LABEL, key_param};
use crate::errors::{AppError, AppResult};
use crate::models::{Record, catalog};
use crate::ui::messages::success;
use crate::ui::render::render_form;

/// Dry run of the create/edit form: print the request that would be sent.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    let Commands::Validate { entity, key, set } = cmd else {
        return Ok(());
    };

    let kind = catalog::find(entity)?;
    let assignments = parse_assignments(set)?;

    let mut form = match key {
        Some(k) => {
            let seed = Record::new().with(kind.key.name, key_param(kind, k));
            FormBinder::new(kind, Some(&seed))?.with_button_label(UPDATE_LABEL)
        }
        None => FormBinder::new(kind, None)?,
    };
    fill_form(&mut form, &assignments)?;

    let request = form.submit(|submission| match submission {
        Submission::Create { params } => {
            ApiRequest::new(Method::Post, kind.api_post()).params(params)
        }
        Submission::Update { key, body } => ApiRequest::new(Method::Put, kind.api_base())
            .param(kind.key.name, key_param(kind, &key))
            .data(body.into_value()),
    });

    match request {
        Ok(req) => {
            success(format!("{} form is valid", kind.display));
            println!("{req}");
            if let Some(body) = &req.data {
                println!("{}", serde_json::to_string_pretty(body)?);
            }
            Ok(())
        }
        Err(errors) => {
            print!("{}", render_form(&form));
            Err(AppError::Validation(errors))
        }
    }
}
