use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_with_rows;

#[derive(Debug, Serialize)]
struct CheckRow {
    check: &'static str,
    passed: bool,
    detail: String,
}

/// Handle `ryder verify`. Exits non-zero when any check fails.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = ctx.library.verify().await?;

    output_with_rows(
        &report,
        || {
            let checks = &report.checks;
            [
                ("authentication", &checks.authentication),
                ("all_categories_present", &checks.all_categories_present),
                ("no_excluded_paths", &checks.no_excluded_paths),
            ]
            .into_iter()
            .map(|(check, result)| CheckRow {
                check,
                passed: result.passed,
                detail: result.message.clone(),
            })
            .collect::<Vec<_>>()
        },
        flags.format,
    )?;

    if !report.success {
        anyhow::bail!(
            "verification failed after {} ms ({} articles)",
            report.duration_ms,
            report.stats.total_articles
        );
    }
    Ok(())
}
