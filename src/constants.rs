//! Chain-level constants shared across modules.

/// Router account that emits the swap transfer inline actions.
pub const SWAP_ROUTER_ACCOUNT: &str = "flon.swap";

/// Memo prefix stamped on router transfers.
pub const SWAP_MEMO_PREFIX: &str = "flon swap by";

/// Node wallet the signing key is imported into at startup.
pub const TRADE_WALLET: &str = "tradewallet";

/// Market-state table on the MM contract, keyed by pair.
pub const MARKETS_TABLE: &str = "markets";

/// Bot-group table on the bot-group contract, keyed by pair.
pub const BOT_GROUPS_TABLE: &str = "botgroups";

/// Delay before retrying after a recoverable failure or a gating skip.
pub const FAST_RETRY_SECS: u64 = 3;

/// HTTP timeout for node calls.
pub const NODE_HTTP_TIMEOUT_SECS: u64 = 10;
