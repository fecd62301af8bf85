pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod entities;
pub mod init;
pub mod list;
pub mod routes;
pub mod show;
pub mod validate;
pub mod whoami;

use crate::core::form::FormBinder;
use crate::core::pages::Outcome;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, toast, warning};

/// Split `FIELD=VALUE` arguments at the first `=`.
pub fn parse_assignments(args: &[String]) -> AppResult<Vec<(String, String)>> {
    args.iter()
        .map(|a| {
            a.split_once('=')
                .filter(|(f, _)| !f.trim().is_empty())
                .map(|(f, v)| (f.trim().to_string(), v.to_string()))
                .ok_or_else(|| AppError::InvalidAssignment(a.clone()))
        })
        .collect()
}

/// Type every assignment into the form.
pub fn fill_form(form: &mut FormBinder, assignments: &[(String, String)]) -> AppResult<()> {
    for (field, value) in assignments {
        form.set(field, value)?;
    }
    Ok(())
}

/// Show what a page asked for. An unconfirmed write is reported as an error
/// so the process exits non-zero.
pub fn report(outcome: &Outcome) -> AppResult<()> {
    match outcome {
        Outcome::Navigate { to, toast: msg } => {
            toast(msg);
            info(format!("→ {to}"));
            Ok(())
        }
        Outcome::Refreshed { toast: msg } => {
            if let Some(m) = msg {
                toast(m);
            }
            Ok(())
        }
        Outcome::Stay => {
            warning("The backend did not confirm the change; nothing was updated.");
            Err(AppError::Other("request was not confirmed".into()))
        }
    }
}
