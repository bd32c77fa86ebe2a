//! Service lifecycle: spawn one worker per configured pair, wire the shared
//! shutdown flag, wait for every worker to drain.

use std::sync::Arc;

use futures::future::join_all;

use crate::chain::{ ChainClient, FlonNode };
use crate::config::Config;
use crate::constants::TRADE_WALLET;
use crate::error::{ BotError, BotResult };
use crate::logger::{ self, LogTag };
use crate::shutdown::{ install_shutdown_handler, ShutdownFlag };
use crate::worker::run_pair_worker;

/// Start the bot and block until shutdown. Fail-fast: with no pairs or no
/// signing key, nothing is spawned at all.
pub async fn run_bot(config: Config) -> BotResult<()> {
    logger::info(LogTag::System, "Exectrade bot started");

    if config.pairs.is_empty() {
        logger::error(LogTag::System, "no trading pairs configured, nothing to do");
        return Err(BotError::Config("pairs list is empty".to_string()));
    }
    if config.trade_privkey.is_empty() {
        logger::error(
            LogTag::System,
            "trade_privkey not configured, please set it in the config file"
        );
        return Err(BotError::Config("trade_privkey is missing".to_string()));
    }

    let node = FlonNode::new(&config.node_urls)?;
    node
        .import_key(TRADE_WALLET, &config.trade_privkey).await
        .map_err(|e| BotError::Wallet(format!("failed to import trade key: {}", e)))?;

    let shutdown = ShutdownFlag::new();
    install_shutdown_handler(shutdown.clone())?;

    let client: Arc<dyn ChainClient> = Arc::new(node);
    start_workers(Arc::new(config), client, shutdown).await;

    Ok(())
}

/// Spawn the pair workers and join them all; a single flag stops every pair
/// simultaneously. Split from [`run_bot`] so tests can drive it with a
/// scripted client and their own flag.
pub async fn start_workers(
    config: Arc<Config>,
    client: Arc<dyn ChainClient>,
    shutdown: ShutdownFlag
) {
    let handles: Vec<_> = config.pairs
        .iter()
        .map(|pair| {
            logger::info(LogTag::System, &format!("starting worker for {}", pair));
            tokio::spawn(
                run_pair_worker(config.clone(), client.clone(), pair.clone(), shutdown.clone())
            )
        })
        .collect();

    join_all(handles).await;
    logger::info(LogTag::System, "all workers stopped");
}
