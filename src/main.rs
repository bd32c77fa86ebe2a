use flonbot::{
    arguments::{ get_config_path, is_help_requested, is_verbose_enabled, print_help },
    config::Config,
    logger::{ self, LogTag },
};

#[tokio::main]
async fn main() {
    if is_help_requested() {
        print_help();
        std::process::exit(0);
    }

    let config_path = get_config_path();
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config {}: {:#}", config_path, e);
            std::process::exit(1);
        }
    };

    logger::init(config.verbose || is_verbose_enabled());

    match flonbot::run::run_bot(config).await {
        Ok(_) => {
            logger::info(LogTag::System, "flonbot exited cleanly");
        }
        Err(e) => {
            logger::error(LogTag::System, &format!("flonbot failed: {}", e));
            std::process::exit(1);
        }
    }
}
