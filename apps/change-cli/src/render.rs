//! Plain-text rendering of results.

use change_core::Breakdown;
use std::fmt::Write;

use crate::state::ResultView;

pub const PENDING_MESSAGE: &str = "No result yet";
pub const UNREACHABLE_MESSAGE: &str = "No combination of the available coins makes this amount";

/// Renders the result panel.
///
/// ```text
/// Minimum coins: 4
///   1 x 1
///   5 x 1
///   10 x 1
///   25 x 1
/// ```
pub fn render_view(view: &ResultView) -> String {
    match view {
        ResultView::Pending => PENDING_MESSAGE.to_string(),
        ResultView::Unreachable => UNREACHABLE_MESSAGE.to_string(),
        ResultView::Computed(breakdown) => render_breakdown(breakdown),
    }
}

pub fn render_breakdown(breakdown: &Breakdown) -> String {
    let mut out = format!("Minimum coins: {}", breakdown.total_coins());
    for (coin, count) in breakdown.iter() {
        // writing to a String cannot fail
        let _ = write!(out, "\n  {coin} x {count}");
    }
    out
}
