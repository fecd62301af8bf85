use crate::backend::Backend;
use crate::core::role::ROLE_ADMIN;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, warning};

pub fn handle(backend: &dyn Backend) -> AppResult<()> {
    let session = Session::start(backend);

    header("Current user");
    match session.user() {
        Some(u) => {
            println!("  id:     {}", u.id);
            println!("  email:  {}", u.email);
            let roles: Vec<&str> = u.roles.iter().map(String::as_str).collect();
            println!("  roles:  {}", roles.join(", "));
            if session.has_role(ROLE_ADMIN) {
                info("Administrator access enabled");
            }
        }
        None => warning("Not logged in"),
    }

    let sys = session.system();
    header("System");
    println!("  h2 console:  {}", sys.spring_h2_console_enabled);
    println!("  swagger ui:  {}", sys.show_swagger_ui_link);
    if let Some(repo) = &sys.source_repo {
        println!("  source repo: {repo}");
    }
    Ok(())
}
