//! Content sources read by the theme: blog posts and standalone pages.
use chrono::NaiveDate;
use maudit::content::{ContentSources, glob_markdown, markdown_entry};
use maudit::content_sources;
use maudit::route::{DynamicRouteContext, PageContext};

pub const POSTS: &str = "posts";
pub const PAGES: &str = "pages";

#[markdown_entry]
pub struct PostContent {
    pub title: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[markdown_entry]
pub struct PageContent {
    pub title: String,
}

pub fn content_sources() -> ContentSources {
    content_sources![
        POSTS => glob_markdown::<PostContent>("content/posts/*.md"),
        PAGES => glob_markdown::<PageContent>("content/pages/*.md")
    ]
}

/// The parts of a post needed by listings, detached from the content source.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl PostSummary {
    fn new(id: &str, data: &PostContent) -> Self {
        Self {
            id: id.to_string(),
            title: data.title.clone(),
            date: data.date,
            description: data.description.clone(),
            tags: data.tags.clone().unwrap_or_default(),
        }
    }

    pub fn url(&self) -> String {
        format!("/blog/{}", self.id)
    }
}

/// Every post, newest first.
pub fn posts(ctx: &mut PageContext) -> Vec<PostSummary> {
    let entries: Vec<_> = ctx.content::<PostContent>(POSTS).entries().collect();

    let mut posts = Vec::with_capacity(entries.len());
    for entry in entries {
        let data = entry.data(ctx);
        posts.push(PostSummary::new(&entry.id, data));
    }

    sort_newest_first(&mut posts);
    posts
}

/// Same as [`posts`], for use while generating the pages of a dynamic route.
pub fn posts_for_pages(ctx: &mut DynamicRouteContext) -> Vec<PostSummary> {
    let entries: Vec<_> = ctx.content::<PostContent>(POSTS).entries().collect();

    let mut posts = Vec::with_capacity(entries.len());
    for entry in entries {
        let data = entry.data(ctx);
        posts.push(PostSummary::new(&entry.id, data));
    }

    sort_newest_first(&mut posts);
    posts
}

/// Sorts by date, newest first. Posts sharing a date are ordered by title.
pub fn sort_newest_first(posts: &mut [PostSummary]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.title.cmp(&b.title)));
}

pub fn tag_slug(tag: &str) -> String {
    slug::slugify(tag)
}

/// Every tag with its slug and number of posts, sorted by name. Tags without any sluggable character are left out,
/// their page would land on `/tags` itself.
pub fn tags(posts: &[PostSummary]) -> Vec<(String, String, usize)> {
    let mut tags: Vec<(String, String, usize)> = Vec::new();

    for tag in posts.iter().flat_map(|post| &post.tags) {
        let slug = tag_slug(tag);
        if slug.is_empty() {
            continue;
        }
        match tags.iter_mut().find(|(_, existing, _)| *existing == slug) {
            Some((_, _, count)) => *count += 1,
            None => tags.push((tag.clone(), slug, 1)),
        }
    }

    tags.sort_by_key(|(name, _, _)| name.to_lowercase());
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, date: &str, tags: &[&str]) -> PostSummary {
        PostSummary {
            id: id.to_string(),
            title: id.to_uppercase(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_sort_newest_first() {
        let mut posts = vec![
            post("old", "2019-03-01", &[]),
            post("new", "2021-11-20", &[]),
            post("middle", "2020-06-15", &[]),
        ];

        sort_newest_first(&mut posts);

        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "middle", "old"]);
    }

    #[test]
    fn test_tag_slug() {
        assert_eq!(tag_slug("Rust"), "rust");
        assert_eq!(tag_slug("Compilers & Interpreters"), "compilers-interpreters");
    }

    #[test]
    fn test_tags_are_counted_by_slug() {
        let posts = vec![
            post("a", "2020-01-01", &["Ruby", "Compilers"]),
            post("b", "2020-01-02", &["ruby"]),
            post("c", "2020-01-03", &["Rails"]),
        ];

        let tags = tags(&posts);

        assert_eq!(
            tags,
            vec![
                ("Compilers".to_string(), "compilers".to_string(), 1),
                ("Rails".to_string(), "rails".to_string(), 1),
                ("Ruby".to_string(), "ruby".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_tags_without_slug_are_skipped() {
        let posts = vec![post("a", "2020-01-01", &["!!!", "Rust"]), post("b", "2020-01-02", &["???"])];

        assert_eq!(tags(&posts), vec![("Rust".to_string(), "rust".to_string(), 1)]);
    }

    #[test]
    fn test_post_url() {
        assert_eq!(post("hello", "2020-01-01", &[]).url(), "/blog/hello");
    }
}
