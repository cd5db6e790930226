use anyhow::Result;

use super::super::{
    args::{ExtractCommand, OutputFormat},
    exit_status::ExitStatus,
    report,
};
use crate::core::ExtractContext;

/// Run extraction and print the results in the requested format.
///
/// Files that fail to load or parse are reported on stderr and turn the
/// exit status into `Failure`; the remaining files are still printed.
pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let ctx = ExtractContext::new(&cmd.common, &cmd.paths)?;
    tracing::debug!(
        files = ctx.files.len(),
        root = %ctx.root_dir.display(),
        "discovered C# files"
    );

    let run = ctx.extract();
    match cmd.format {
        OutputFormat::Text => report::print_text(&run),
        OutputFormat::Json => report::print_json(&run)?,
    }
    report::print_failures(&run);

    if run.failures.is_empty() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
