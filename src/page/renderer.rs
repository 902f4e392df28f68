//! @acp:module "Page Renderer"
//! @acp:summary "Handlebars page template with minimal escaping"
//! @acp:domain cli
//! @acp:layer output
//!
//! Page rendering
//!
//! One fixed handlebars template. Escaping is limited to `&`, `<` and `>`;
//! the ampersand goes first so entities produced by the other two are not
//! escaped again.

use chrono::NaiveDate;
use handlebars::Handlebars;
use serde::Serialize;

use super::cover::CoverImage;
use crate::catalog::CatalogEntry;
use crate::error::Result;
use crate::excerpt::Excerpt;

const PAGE_TEMPLATE_NAME: &str = "page";

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width,initial-scale=1" />
<title>Daily One-Pager • {{date}}</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin:0; background:#0f172a; color:#e2e8f0; }
  .wrap { max-width: 820px; margin: 56px auto; padding: 0 20px; }
  .card { background:#111827; border-radius:20px; padding:28px; box-shadow:0 10px 30px rgba(0,0,0,.35); }
  h1 { margin: 0 0 6px; font-size: 26px; }
  .meta { opacity:.85; font-size:14px; margin-bottom:16px }
  .cover { width: 160px; height: 220px; background:#1f2937; border-radius:8px; margin: 6px 0 18px; display:block; }
  .nocover { display:flex; align-items:center; justify-content:center; color:#94a3b8; font-size:13px; }
  p { line-height:1.75; white-space:pre-wrap; }
  .section { font-size: 16px; opacity:.9; margin-top: -6px; margin-bottom:12px; }
</style>
</head>
<body>
  <div class="wrap">
    <div class="card">
      <div class="meta">{{date}}</div>
      <h1>{{title}}</h1>
      <div class="meta">by {{author}}</div>
      {{#if cover_present}}<img class='cover' alt='Book cover' src='{{cover_path}}' />{{else}}<div class='cover nocover'>cover image not found</div>{{/if}}
      <div class="section">{{section_title}}</div>
      <p>{{passage}}</p>
    </div>
  </div>
</body>
</html>"#;

/// Date format shown on the page, e.g. `October 17, 2026`
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// Escape `&`, `<` and `>` only
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Values substituted into the template
#[derive(Debug, Serialize)]
struct PageContext<'a> {
    date: String,
    title: &'a str,
    author: &'a str,
    cover_path: &'a str,
    cover_present: bool,
    section_title: &'a str,
    passage: &'a str,
}

/// Renders the daily page
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(escape_html);
        registry.register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { registry })
    }

    pub fn render(
        &self,
        date: NaiveDate,
        entry: &CatalogEntry,
        excerpt: &Excerpt,
        cover: &CoverImage,
    ) -> Result<String> {
        let context = PageContext {
            date: date.format(DATE_FORMAT).to_string(),
            title: &entry.title,
            author: &entry.author,
            cover_path: &cover.rel_path,
            cover_present: cover.present,
            section_title: &excerpt.title,
            passage: &excerpt.content,
        };
        Ok(self.registry.render(PAGE_TEMPLATE_NAME, &context)?)
    }
}

/// Render the page with a one-off renderer
pub fn render_page(
    date: NaiveDate,
    entry: &CatalogEntry,
    excerpt: &Excerpt,
    cover: &CoverImage,
) -> Result<String> {
    PageRenderer::new()?.render(date, entry, excerpt, cover)
}
