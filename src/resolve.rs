use crate::normalize::{normalize, strip_amateur_marker, surname};
use log::warn;
use serde::{Deserialize, Serialize};

/// How a feed spelling was mapped onto the canonical pool. `Unresolved` is a
/// queryable state on the player record, not just a log line.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionStatus {
    Alias,
    Exact,
    Surname,
    Initial,
    Unresolved,
}

#[derive(Clone, Debug)]
pub struct Resolved {
    pub name: String,
    pub status: ResolutionStatus,
}

/// Hand-maintained irregular mappings from normalized feed spellings to the
/// canonical spelling the rankings feed uses. Extend this table when the logs
/// report an unresolved name.
const PLAYER_ALIASES: &[(&str, &str)] = &[
    ("cam smith", "Cameron Smith"),
    ("cam davis", "Cameron Davis"),
    ("cam young", "Cameron Young"),
    ("matt fitzpatrick", "Matthew Fitzpatrick"),
    ("alex noren", "Alexander Noren"),
    ("jt poston", "J.T. Poston"),
    ("j.t. poston", "J.T. Poston"),
    ("byeong-hun an", "Byeong Hun An"),
    ("seonghyeon kim", "S.H. Kim"),
    ("sung-hoon kang", "Sung Kang"),
    ("sam stevens jr", "Sam Stevens"),
    ("nicolai hojgaard", "Nicolai Højgaard"),
    ("rasmus hojgaard", "Rasmus Højgaard"),
    ("thorbjorn olesen", "Thorbjørn Olesen"),
    ("joaquin niemann", "Joaquín Niemann"),
];

/// Maps an odds-feed spelling onto the canonical name pool. Each step
/// short-circuits on a hit:
///
/// 1. strip the amateur marker and normalize
/// 2. static alias table
/// 3. empty pool: nothing to resolve against, return the input
/// 4. exact normalized match
/// 5. unique surname match
/// 6. initial-letter disambiguation among surname candidates
/// 7. refuse to guess: return the input unchanged, flagged `Unresolved`
///
/// Idempotent, and safe to re-run as the pool grows: a name already in
/// canonical form hits step 4.
#[must_use]
pub fn resolve(feed_name: &str, pool: &[String]) -> Resolved {
    let stripped = strip_amateur_marker(feed_name);
    let needle = normalize(stripped);

    if let Some((_, canonical)) = PLAYER_ALIASES.iter().find(|(alias, _)| *alias == needle) {
        return Resolved {
            name: (*canonical).to_string(),
            status: ResolutionStatus::Alias,
        };
    }

    if pool.is_empty() {
        return Resolved {
            name: stripped.to_string(),
            status: ResolutionStatus::Unresolved,
        };
    }

    if let Some(exact) = pool.iter().find(|candidate| normalize(candidate) == needle) {
        return Resolved {
            name: exact.clone(),
            status: ResolutionStatus::Exact,
        };
    }

    let needle_surname = surname(&needle).to_string();
    let candidates: Vec<&String> = pool
        .iter()
        .filter(|candidate| surname(&normalize(candidate)) == needle_surname)
        .collect();

    if candidates.len() == 1 {
        return Resolved {
            name: candidates[0].clone(),
            status: ResolutionStatus::Surname,
        };
    }

    if candidates.len() > 1
        && let Some(initial) = leading_initial(&needle)
    {
        let narrowed: Vec<&&String> = candidates
            .iter()
            .filter(|candidate| normalize(candidate).starts_with(initial))
            .collect();
        if narrowed.len() == 1 {
            return Resolved {
                name: (*narrowed[0]).clone(),
                status: ResolutionStatus::Initial,
            };
        }
    }

    warn!("unresolved player name {stripped:?} ({} surname candidates)", candidates.len());
    Resolved {
        name: stripped.to_string(),
        status: ResolutionStatus::Unresolved,
    }
}

/// First token's initial, but only when the token is a bare initial like
/// "j" or "j." - a full first name that merely differs in spelling must not
/// narrow the candidate set.
fn leading_initial(normalized: &str) -> Option<char> {
    let first = normalized.split_whitespace().next()?;
    let mut chars = first.chars();
    let initial = chars.next()?;
    match chars.next() {
        None => Some(initial),
        Some('.') if chars.next().is_none() => Some(initial),
        _ => None,
    }
}
