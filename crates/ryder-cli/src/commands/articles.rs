use serde::Serialize;

use ryder_content::tags::DEFAULT_RELATED_LIMIT;
use ryder_content::toc::{TocHeading, extract_toc};
use ryder_core::entities::Article;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ArticleArgs, ArticlesArgs};
use crate::commands::{ArticleRow, article_rows, require_article};
use crate::context::AppContext;
use crate::output::{output, output_with_rows};

/// Length of the page description shown with an article.
const EXCERPT_CHARS: usize = 155;

#[derive(Debug, Serialize)]
struct CategoryRow {
    name: &'static str,
    label: &'static str,
    accent: &'static str,
    count: usize,
}

/// Handle `ryder categories`.
pub async fn handle_categories(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let summaries = ctx.library.fetch_categories().await?;
    let rows = summaries
        .iter()
        .map(|s| CategoryRow {
            name: s.name.as_str(),
            label: s.name.label(),
            accent: s.name.accent(),
            count: s.count,
        })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}

/// Handle `ryder articles`.
pub async fn handle_list(
    args: &ArticlesArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let articles = match args.category {
        Some(category) => ctx.library.fetch_category_articles(category).await?,
        None => ctx.library.fetch_all_articles().await?,
    };
    output_with_rows(&articles, || article_rows(&articles), flags.format)
}

/// Everything an article page shows.
#[derive(Debug, Serialize)]
struct ArticlePage {
    article: Article,
    toc: Vec<TocHeading>,
    related: Vec<ArticleRow>,
}

/// Handle `ryder article`.
pub async fn handle_show(
    args: &ArticleArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let article = require_article(ctx, &args.category, &args.slug).await?;
    let related = ctx
        .library
        .related_articles(&article, DEFAULT_RELATED_LIMIT)
        .await?;

    let page = ArticlePage {
        toc: extract_toc(&article.content),
        related: article_rows(&related),
        article,
    };
    output_with_rows(
        &page,
        || {
            serde_json::json!({
                "address": page.article.address(),
                "title": page.article.title,
                "status": page.article.status.label(),
                "author": page.article.author,
                "tags": page.article.tags,
                "sections": page.toc.iter().map(|h| h.text.as_str()).collect::<Vec<_>>(),
                "related": page.related.iter().map(|r| r.address.as_str()).collect::<Vec<_>>(),
                "excerpt": page.article.excerpt(EXCERPT_CHARS),
            })
        },
        flags.format,
    )
}
