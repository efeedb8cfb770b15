use serde::{Deserialize, Serialize};
use std::fmt;

/// Compact encoding of one tournament result: an outright position, a tied
/// position, or a terminal marker.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinishCode {
    Position(u32),
    Tied(u32),
    MissedCut,
    Withdrew,
    Disqualified,
}

impl FinishCode {
    /// Parses a single code like "1", "T5", "MC", "WD" or "DQ".
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        match code.to_ascii_uppercase().as_str() {
            "MC" | "CUT" => return Some(FinishCode::MissedCut),
            "WD" => return Some(FinishCode::Withdrew),
            "DQ" => return Some(FinishCode::Disqualified),
            _ => {}
        }
        if let Some(rest) = code.strip_prefix('T').or_else(|| code.strip_prefix('t')) {
            return rest.parse().ok().map(FinishCode::Tied);
        }
        code.parse().ok().map(FinishCode::Position)
    }
}

impl fmt::Display for FinishCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinishCode::Position(p) => write!(f, "{p}"),
            FinishCode::Tied(p) => write!(f, "T{p}"),
            FinishCode::MissedCut => write!(f, "MC"),
            FinishCode::Withdrew => write!(f, "WD"),
            FinishCode::Disqualified => write!(f, "DQ"),
        }
    }
}

/// Parses a dash-separated feed string like "T1-T2-1", dropping any token
/// that does not parse as a finish code.
#[must_use]
pub fn parse_finish_codes(s: &str) -> Vec<FinishCode> {
    s.split('-').filter_map(FinishCode::parse).collect()
}

/// Renders a sequence back into the feed's dash-separated shape for display.
#[must_use]
pub fn display_finish_codes(codes: &[FinishCode]) -> String {
    if codes.is_empty() {
        return "-".to_string();
    }
    codes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("-")
}
