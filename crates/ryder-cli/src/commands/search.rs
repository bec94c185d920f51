use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::output_with_rows;

#[derive(Debug, Serialize)]
struct HitRow {
    score: String,
    address: String,
    title: String,
    matched: String,
}

/// Handle `ryder search`.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let hits = ctx.library.search(&args.query, args.limit).await?;
    tracing::debug!(query = %args.query, hits = hits.len(), "search finished");

    output_with_rows(
        &hits,
        || {
            hits.iter()
                .map(|hit| HitRow {
                    score: format!("{:.2}", hit.score),
                    address: hit.article.address(),
                    title: hit.article.title.clone(),
                    matched: hit
                        .matched
                        .iter()
                        .map(|key| key.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                })
                .collect::<Vec<_>>()
        },
        flags.format,
    )
}
