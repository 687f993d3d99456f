//! Query classification: an explicit ordered routing table.
//!
//! The router is a stand-in for intent classification, so the contract is
//! kept deliberately dumb: an ordered list of (keyword, operation) pairs
//! evaluated first-match-wins against the lower-cased input. The order IS
//! the contract — an input containing both "profit" and "project" always
//! takes the profit path because that rule comes first, not because any
//! intent was inferred.

/// The closed set of deterministic operations the router can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOp {
    /// Sum the table and report revenue − cost.
    CalcProfit,
    /// Fetch one record by normalized-name substring match.
    LookupProject,
}

/// One routing rule: if the lower-cased input contains `keyword`, run `op`.
#[derive(Debug)]
pub struct Route {
    pub keyword: &'static str,
    pub op: RouteOp,
}

/// The routing table, evaluated top to bottom.
pub const ROUTES: &[Route] = &[
    Route {
        keyword: "profit",
        op: RouteOp::CalcProfit,
    },
    Route {
        keyword: "project",
        op: RouteOp::LookupProject,
    },
];

/// Classify free text against [`ROUTES`].
///
/// Returns `None` when no keyword matches — the caller answers with the
/// fixed capability-limitation message and writes no audit entry.
pub fn classify(text: &str) -> Option<RouteOp> {
    let lowered = text.to_lowercase();
    ROUTES
        .iter()
        .find(|route| lowered.contains(route.keyword))
        .map(|route| route.op)
}

/// Normalize a project name or query for lookup matching:
/// underscores become spaces, everything lower-cased.
///
/// Makes "project alpha", "Project_Alpha", and "PROJECT ALPHA" equivalent.
pub fn normalize(text: &str) -> String {
    text.replace('_', " ").to_lowercase()
}
