//! In-place refresh of a solutions README from catalog statistics
//!
//! Three spots are rewritten: the `Problems%20Solved-N` badge, the
//! `Last updated: <strong>…</strong>` line and the statistics dashboard
//! table. Everything else is left as written.

use crate::catalog::CatalogStats;
use regex::{Captures, NoExpand, Regex};
use std::sync::OnceLock;

static SOLVED_BADGE: OnceLock<Regex> = OnceLock::new();
static LAST_UPDATED: OnceLock<Regex> = OnceLock::new();
static DASHBOARD: OnceLock<Regex> = OnceLock::new();

/// Width of the progress bar in the dashboard
const PROGRESS_WIDTH: usize = 5;

fn solved_badge() -> &'static Regex {
    SOLVED_BADGE
        .get_or_init(|| Regex::new(r"Problems%20Solved-\d+").expect("badge pattern is valid"))
}

fn last_updated() -> &'static Regex {
    LAST_UPDATED.get_or_init(|| {
        Regex::new(r"Last updated: <strong>.*?</strong>").expect("date pattern is valid")
    })
}

fn dashboard() -> &'static Regex {
    DASHBOARD.get_or_init(|| {
        Regex::new(r"(?m)^(###[^\n]*Statistics Dashboard[^\n]*)\n\n(?:\|[^\n]*(?:\n|$))+")
            .expect("dashboard pattern is valid")
    })
}

/// Render the dashboard table, without its heading
pub fn render_dashboard(stats: &CatalogStats) -> String {
    let filled = stats.total.min(PROGRESS_WIDTH);
    let rated_800 = stats.by_rating.get("800").copied().unwrap_or(0);

    format!(
        "| Metric | Count | Progress |\n\
         |--------|-------|----------|\n\
         | **Total Problems** | {} | {}{} |\n\
         | **800-Rated** | {} | {} |\n",
        stats.total,
        "🟩".repeat(filled),
        "⬜".repeat(PROGRESS_WIDTH - filled),
        rated_800,
        if rated_800 > 0 { "✅" } else { "⏳" },
    )
}

/// Rewrite the badge count, update date and dashboard of a README
///
/// `updated` is the label placed in the `Last updated` line, such as
/// `October 2026`.
pub fn refresh_readme(content: &str, stats: &CatalogStats, updated: &str) -> String {
    let badge = format!("Problems%20Solved-{}", stats.total);
    let content = solved_badge().replace_all(content, NoExpand(badge.as_str()));

    let date = format!("Last updated: <strong>{updated}</strong>");
    let content = last_updated().replace_all(&content, NoExpand(date.as_str()));

    let table = render_dashboard(stats);
    dashboard()
        .replace_all(&content, |caps: &Captures<'_>| {
            format!("{}\n\n{}", &caps[1], table)
        })
        .into_owned()
}
