//! Route ranking.
//!
//! Orders scored routes by composite score, best first.

use super::score::ScoredRoute;

/// Sort routes by composite score, highest first.
///
/// The sort is stable: routes with equal scores keep their input order,
/// which is origin-major candidate order.
pub fn rank_routes(mut routes: Vec<ScoredRoute>) -> Vec<ScoredRoute> {
    routes.sort_by(|a, b| b.composite().total_cmp(&a.composite()));
    routes
}

/// Rank and keep the best `k`.
pub fn top_k(routes: Vec<ScoredRoute>, k: usize) -> Vec<ScoredRoute> {
    let mut ranked = rank_routes(routes);
    ranked.truncate(k);
    ranked
}
