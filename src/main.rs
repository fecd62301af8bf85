//! clubadmin main entrypoint.

use clubadmin::run;
use clubadmin::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
