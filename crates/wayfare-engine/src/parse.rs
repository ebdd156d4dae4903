//! Target specification parsing
//!
//! Turns the raw argument list of `visit <target> [area] [page]` into a
//! [`TargetSpec`]. Shape rules:
//!
//! - 0 arguments, or more than 3, is a usage error;
//! - a single argument containing `:` is split on it first;
//! - with 3 arguments the third must be an integer page; a parse failure
//!   is terminal, never a silent fallback;
//! - with 2 arguments the second is a page if it parses as an integer,
//!   otherwise it must name a known area;
//! - a first token that is coordinate-shaped (contains `;` or `,`, or is
//!   shorter than 2 characters) is a direct plot reference, anything else
//!   is an identity/alias token.

use wayfare_core::{PlotStore, Result, VisitError};
use wayfare_core_types::{AreaId, PlotId};

/// Abstract command shape shown in usage errors
pub const VISIT_USAGE: &str = "visit <player> | <alias> | <plot> [area] [page]";

/// What the first token referred to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A player name, UUID, or alias; disambiguated during resolution
    Token(String),
    /// A direct plot coordinate reference
    Direct(PlotId),
}

/// Parsed input of one visitation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    pub target: Target,
    /// Explicit area qualifier, if one was given
    pub area: Option<AreaId>,
    /// Explicit 1-based page; absent means "default to 1"
    pub page: Option<i64>,
}

fn usage() -> VisitError {
    VisitError::Usage {
        usage: VISIT_USAGE.to_string(),
    }
}

fn parse_page(token: &str) -> Option<i64> {
    token.parse::<i64>().ok()
}

/// Parse the argument list into a [`TargetSpec`]
///
/// # Errors
///
/// - `Usage` for 0 or more than 3 arguments;
/// - `InvalidNumber` for a non-integer third argument, or a second
///   argument that is neither an integer nor a known area name;
/// - `NoMatch` for a coordinate-shaped first token that does not parse.
pub fn parse_visit_args(args: &[&str], store: &dyn PlotStore) -> Result<TargetSpec> {
    if args.is_empty() {
        return Err(usage());
    }

    let split;
    let mut args = args;
    if args.len() == 1 && args[0].contains(':') {
        split = args[0].split(':').collect::<Vec<_>>();
        args = &split[..];
    }

    if args.len() > 3 {
        return Err(usage());
    }

    let mut page: Option<i64> = None;
    let mut area: Option<AreaId> = None;

    if args.len() == 3 {
        page = Some(parse_page(args[2]).ok_or_else(|| VisitError::InvalidNumber {
            value: args[2].to_string(),
        })?);
    }

    if args.len() >= 2 {
        // With the page already taken (3-arg form), the middle token must
        // be an area. Otherwise an integer is a page, anything else an area.
        match (page, parse_page(args[1])) {
            (None, Some(n)) => page = Some(n),
            _ => {
                area = Some(store.find_area(args[1]).ok_or_else(|| {
                    VisitError::InvalidNumber {
                        value: args[1].to_string(),
                    }
                })?);
            }
        }
    }

    let token = args[0];
    let target = if token.len() >= 2 && !token.contains(';') && !token.contains(',') {
        Target::Token(token.to_string())
    } else {
        let id = PlotId::parse(token).map_err(|_| VisitError::NoMatch {
            token: token.to_string(),
        })?;
        Target::Direct(id)
    };

    Ok(TargetSpec { target, area, page })
}
