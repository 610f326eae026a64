//! Side-by-side old→new listing for dry runs and verbose confirmation.

use chrono::NaiveDateTime;
use tracing::error;

const BANNER: &str = "===========================================";
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One old→new pairing, ISO-8601 formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    pub old: String,
    pub new: String,
}

/// Pair the old and new axes by index.
///
/// A length mismatch means the generator broke its length-preservation
/// contract; the reporter logs an error and returns `None` rather than
/// truncating or panicking, so a dry run stays usable.
pub fn diff_rows(old: &[NaiveDateTime], new: &[NaiveDateTime]) -> Option<Vec<DiffRow>> {
    if old.len() != new.len() {
        error!(
            old_len = old.len(),
            new_len = new.len(),
            "unable to report time diff: axes are of different length"
        );
        return None;
    }
    Some(
        old.iter()
            .zip(new)
            .map(|(o, n)| DiffRow {
                old: o.format(ISO_FORMAT).to_string(),
                new: n.format(ISO_FORMAT).to_string(),
            })
            .collect(),
    )
}

/// Render rows in the tool's banner layout, one `old --> new` line per
/// sample.
pub fn render(rows: &[DiffRow]) -> String {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push('\n');
    out.push_str("    OLD TIME        -->   NEW TIME\n");
    out.push_str(BANNER);
    out.push('\n');
    for row in rows {
        out.push_str(&row.old);
        out.push_str(" --> ");
        out.push_str(&row.new);
        out.push('\n');
    }
    out.push_str(BANNER);
    out.push('\n');
    out
}
