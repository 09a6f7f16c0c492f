use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::log::audit;
use crate::errors::AppResult;
use crate::store::RecordStore;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty record store
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.store.clone(), cli.test)?;
    let store = RecordStore::open(cfg.store_path());

    println!("⚙️  Initializing rShiftLog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Store       : {}", store.path().display());

    if store.init()? {
        println!("✅ Store initialized at {}", store.path().display());
        audit(
            store.path(),
            "init",
            "",
            &format!("Store initialized at {}", store.path().display()),
        );
    } else {
        println!("ℹ️  Store already present, left untouched");
    }

    println!("🎉 rShiftLog initialization completed!");
    Ok(())
}
