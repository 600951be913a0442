use anyhow::Context;
use clap::Parser;
use fleet_inventory::utils::logger;
use fleet_inventory::{CliConfig, LocalStorage, Session, Settings};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入並合併配置
    let settings = match Settings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            if let Some(suggestion) = e.recovery_suggestion() {
                eprintln!("💡 {}", suggestion);
            }
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());

    tracing::info!("Starting fleet shell");
    tracing::debug!("Settings: {:?}", settings);

    let mut session = Session::new(LocalStorage::current_dir(), settings);
    println!("{}", session.start());
    println!("Type `help` for a list of commands.");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session
        .run(stdin.lock(), stdout.lock())
        .context("fleet shell terminated on an I/O error")?;

    tracing::info!("Fleet shell closed");
    Ok(())
}
