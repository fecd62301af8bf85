use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command: write the configuration file with defaults
/// (and `--server`, if given).
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing clubadmin…");

    let path = cfg.save(cli.test)?;

    println!("📄 Config file : {}", path.display());
    println!("🌐 Server      : {}", cfg.server_url);

    success("clubadmin initialization completed!");
    Ok(())
}
