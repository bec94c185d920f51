use serde::Serialize;

use ryder_content::leaderboard::resolve_doc_link;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DocLinkArgs;
use crate::context::AppContext;
use crate::output::{output, output_with_rows};

#[derive(Debug, Serialize)]
struct LeaderboardRow {
    section: String,
    subcategory: &'static str,
    rank: u32,
    name: String,
    status: &'static str,
    verdict: String,
    article: Option<String>,
}

/// Handle `ryder leaderboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = ctx.library.leaderboard_view().await?;
    output_with_rows(
        &view,
        || {
            view.groups
                .iter()
                .flat_map(|group| {
                    group.subcategories.iter().flat_map(move |sub| {
                        sub.entries.iter().map(move |entry| LeaderboardRow {
                            section: format!("{} {}", group.icon, group.label),
                            subcategory: sub.subcategory.label(),
                            rank: entry.rank,
                            name: entry.name.clone(),
                            status: entry.status.as_str(),
                            verdict: entry.verdict.clone(),
                            article: entry.doc_link.as_deref().and_then(resolve_doc_link),
                        })
                    })
                })
                .collect::<Vec<_>>()
        },
        flags.format,
    )
}

#[derive(Debug, Serialize)]
struct DocLinkResolution<'a> {
    link: &'a str,
    route: Option<String>,
}

/// Handle `ryder doc-link`.
pub fn handle_doc_link(args: &DocLinkArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &DocLinkResolution {
            link: &args.link,
            route: resolve_doc_link(&args.link),
        },
        flags.format,
    )
}
