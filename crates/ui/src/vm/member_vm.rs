use std::collections::{HashMap, HashSet};

use hub_core::model::{MemberPage, RepoItem};

/// Render editor-written markdown to sanitised HTML.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "br", "em", "strong", "del", "code", "pre", "blockquote", "ul", "ol", "li", "a",
        "table", "thead", "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .link_rel(Some("noopener noreferrer"))
        .clean(html)
        .to_string()
}

#[must_use]
pub fn format_stars(stars: u64) -> String {
    if stars >= 1000 {
        let tenths = stars / 100;
        format!("{}.{}k", tenths / 10, tenths % 10)
    } else {
        stars.to_string()
    }
}

/// A repository row inside a collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberRowVm {
    pub rid: String,
    pub title: String,
    pub description_html: String,
    pub lang: Option<String>,
    pub stars_label: String,
    pub github_url: String,
}

impl From<&RepoItem> for MemberRowVm {
    fn from(item: &RepoItem) -> Self {
        let title = if item.full_name.is_empty() {
            item.name.clone()
        } else {
            item.full_name.clone()
        };
        Self {
            rid: item.rid.clone(),
            title,
            description_html: markdown_to_html(&item.description),
            lang: item.primary_lang.clone(),
            stars_label: format_stars(item.stars),
            github_url: item.github_url.clone(),
        }
    }
}

/// Drill-down page data for one collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberPageVm {
    pub name: String,
    pub shareable: bool,
    pub rows: Vec<MemberRowVm>,
    pub page: u32,
    pub page_total: u32,
    pub total: u32,
    pub has_previous: bool,
    pub has_next: bool,
}

impl From<&MemberPage> for MemberPageVm {
    fn from(page: &MemberPage) -> Self {
        Self {
            name: page.collection.name.clone(),
            shareable: page.collection.status.is_public(),
            rows: page.items.iter().map(MemberRowVm::from).collect(),
            page: page.page,
            page_total: page.page_total,
            total: page.total,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
        }
    }
}
