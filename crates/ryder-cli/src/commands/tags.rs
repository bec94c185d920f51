use serde::Serialize;

use ryder_content::tags::{articles_by_tag, slug_to_label, tag_display_name};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{RelatedArgs, TagArgs, TagsArgs};
use crate::commands::{ArticleRow, article_rows, require_article};
use crate::context::AppContext;
use crate::output::{output, output_with_rows};

/// Handle `ryder tags`.
pub async fn handle_list(args: &TagsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tags = if args.slugs {
        ctx.library.all_tag_slugs().await?
    } else {
        ctx.library.all_tags().await?
    };
    output(&tags, flags.format)
}

#[derive(Debug, Serialize)]
struct TagPage {
    slug: String,
    name: String,
    articles: Vec<ArticleRow>,
}

/// Handle `ryder tag`.
pub async fn handle_tag(args: &TagArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let articles = ctx.library.fetch_all_articles().await?;
    let tagged = articles_by_tag(&articles, &args.slug);
    if tagged.is_empty() {
        anyhow::bail!("tag not found: {}", args.slug);
    }

    let page = TagPage {
        name: tag_display_name(&articles, &args.slug).unwrap_or_else(|| slug_to_label(&args.slug)),
        slug: args.slug.clone(),
        articles: article_rows(&tagged),
    };
    output_with_rows(&page, || &page.articles, flags.format)
}

/// Handle `ryder related`.
pub async fn handle_related(
    args: &RelatedArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let article = require_article(ctx, &args.category, &args.slug).await?;
    let related = ctx.library.related_articles(&article, args.limit).await?;
    output_with_rows(&related, || article_rows(&related), flags.format)
}
