/// Centralized argument handling for flonbot.
///
/// Keeps the raw argument vector in a thread-safe singleton so flag checks
/// work from any module and can be overridden by tests.
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => env::args().collect(),
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args()
        .iter()
        .any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
/// Returns None if the flag is not found or has no value
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    for (i, arg) in args.iter().enumerate() {
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

/// Verbose mode: shows debug-level logs including raw submission results
pub fn is_verbose_enabled() -> bool {
    has_arg("--verbose")
}

/// `--config <path>`, defaulting to config.json in the working directory
pub fn get_config_path() -> String {
    get_arg_value("--config").unwrap_or_else(|| "config.json".to_string())
}

pub fn print_help() {
    println!("flonbot - market-making trade bot for the FLON chain");
    println!();
    println!("USAGE:");
    println!("    flonbot [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --config <path>    Config file path (default: config.json)");
    println!("    --verbose          Show debug logs, including raw receipts");
    println!("    --help, -h         Print this help text");
    println!();
    println!("A default config template is written on first run. The service");
    println!("starts one worker per configured trading pair and stops all of");
    println!("them on Ctrl-C.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arg_value_follows_flag() {
        set_cmd_args(vec![
            "flonbot".to_string(),
            "--config".to_string(),
            "/tmp/custom.json".to_string(),
        ]);
        assert_eq!(get_arg_value("--config").as_deref(), Some("/tmp/custom.json"));
        assert_eq!(get_config_path(), "/tmp/custom.json");
        assert!(!has_arg("--verbose"));

        set_cmd_args(vec!["flonbot".to_string()]);
        assert_eq!(get_config_path(), "config.json");
    }
}
