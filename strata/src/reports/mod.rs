//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod info;
mod output;
mod project;

pub use check::CheckReport;
pub use generate::GenerateReport;
pub use info::InfoReport;
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Output, Report, TerminalOutput};
pub use project::ProjectSummary;

use strata_core::{Emitted, WriteResult};

/// Render one emitted file according to what happened to it.
fn render_emitted(out: &mut dyn Output, emitted: &Emitted) {
    let path = emitted.path.display().to_string();
    match emitted.result {
        WriteResult::Written => out.added_item(&path),
        WriteResult::Planned => out.planned_item(&path),
        WriteResult::Skipped => out.skipped_item(&format!("{} (kept)", path)),
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}
