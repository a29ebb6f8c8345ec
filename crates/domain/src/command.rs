use std::fmt;

/// How a command is recognised in a normalized question name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchRule {
    /// The whole name must be equal, e.g. `help`.
    Exact(&'static str),
    /// The name must end with this suffix (leading dot included), e.g. `.ai`.
    /// Everything in front of it is the argument.
    Suffix(&'static str),
}

impl MatchRule {
    /// Returns the argument when `name` matches this rule.
    pub fn match_argument<'a>(&self, name: &'a str) -> Option<&'a str> {
        match self {
            MatchRule::Exact(exact) => (name == *exact).then_some(""),
            MatchRule::Suffix(suffix) => name.strip_suffix(suffix),
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            MatchRule::Exact(exact) => exact,
            MatchRule::Suffix(suffix) => suffix,
        }
    }

    /// True when some name could be matched by both rules.
    pub fn overlaps(&self, other: &MatchRule) -> bool {
        match (self, other) {
            (MatchRule::Exact(a), MatchRule::Exact(b)) => a == b,
            (MatchRule::Suffix(a), MatchRule::Suffix(b)) => a.ends_with(b) || b.ends_with(a),
            (MatchRule::Exact(exact), MatchRule::Suffix(suffix))
            | (MatchRule::Suffix(suffix), MatchRule::Exact(exact)) => exact.ends_with(suffix),
        }
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchRule::Exact(exact) => write!(f, "exact({})", exact),
            MatchRule::Suffix(suffix) => write!(f, "suffix(*{})", suffix),
        }
    }
}

/// Identifies the handler behind a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Time,
    Weather,
    Unit,
    Forex,
    Ip,
    Words,
    Pi,
    Ai,
    Help,
    Dice,
    Cidr,
    Coin,
    Random,
    Epoch,
    Aerial,
    Uuid,
    Sudoku,
    Excuse,
    Dictionary,
    Base,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Time => "time",
            CommandKind::Weather => "weather",
            CommandKind::Unit => "unit",
            CommandKind::Forex => "fx",
            CommandKind::Ip => "ip",
            CommandKind::Words => "words",
            CommandKind::Pi => "pi",
            CommandKind::Ai => "ai",
            CommandKind::Help => "help",
            CommandKind::Dice => "dice",
            CommandKind::Cidr => "cidr",
            CommandKind::Coin => "coin",
            CommandKind::Random => "rand",
            CommandKind::Epoch => "epoch",
            CommandKind::Aerial => "aerial",
            CommandKind::Uuid => "uuid",
            CommandKind::Sudoku => "sudoku",
            CommandKind::Excuse => "excuse",
            CommandKind::Dictionary => "dict",
            CommandKind::Base => "base",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one entry in the command table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub rule: MatchRule,
    pub kind: CommandKind,
    pub ttl: u32,
    /// Results are stored in the result cache, keyed by the decoded argument.
    pub cacheable: bool,
}

impl Command {
    pub fn exact(name: &'static str, kind: CommandKind, ttl: u32) -> Self {
        Self {
            rule: MatchRule::Exact(name),
            kind,
            ttl,
            cacheable: false,
        }
    }

    pub fn suffix(suffix: &'static str, kind: CommandKind, ttl: u32) -> Self {
        Self {
            rule: MatchRule::Suffix(suffix),
            kind,
            ttl,
            cacheable: false,
        }
    }

    pub fn cached(mut self) -> Self {
        self.cacheable = true;
        self
    }
}
