/// Source tags for log lines, one per subsystem.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTag {
    System,
    Worker,
    Market,
    Chain,
    Parser,
}

impl LogTag {
    pub fn to_plain_string(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Worker => "WORKER",
            LogTag::Market => "MARKET",
            LogTag::Chain => "CHAIN",
            LogTag::Parser => "PARSER",
        }
    }
}
