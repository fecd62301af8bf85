use crate::backend::Backend;
use crate::cli::parser::Commands;
use crate::core::routes::RouteTable;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::CurrentUser;
use crate::ui::messages::header;
use crate::utils::table::Table;

/// Print the routes visible to `user`.
pub fn print_reachable(user: Option<&CurrentUser>) {
    let table = RouteTable::default();

    let who = match user {
        Some(u) => format!(
            "{} [{}]",
            u.email,
            u.roles.iter().cloned().collect::<Vec<_>>().join(", ")
        ),
        None => "anonymous".to_string(),
    };
    header(format!("Routes for {who}"));

    let mut t = Table::with_headers(&["PATH", "ROLE", "PAGE"]);
    for r in table.reachable(user) {
        t.add_row(vec![
            r.path.clone(),
            r.role.unwrap_or("-").to_string(),
            r.page.to_string(),
        ]);
    }
    print!("{}", t.render());
}

/// `--role` evaluates offline for a synthetic user; otherwise the session
/// user is fetched from the backend.
pub fn handle(cmd: &Commands, backend: Option<&dyn Backend>) -> AppResult<()> {
    let Commands::Routes { roles } = cmd else {
        return Ok(());
    };

    if !roles.is_empty() {
        let user = CurrentUser::new(0, "cli@localhost", roles.iter().cloned());
        print_reachable(Some(&user));
        return Ok(());
    }

    let session = match backend {
        Some(b) => Session::start(b),
        None => Session::anonymous(),
    };
    print_reachable(session.user());
    Ok(())
}
