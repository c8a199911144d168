//! Presentation layer - plain view structs rendered through askama templates.
//!
//! Builders here only reshape query results for display; they make no
//! storage calls and hold no state.

use askama::Template;
use chrono::{DateTime, Utc};

use inkwell_core::domain::{Comment, Post, PostListing, SortKey};

/// Timestamps are shown with minute precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Debug, Clone)]
pub struct SortOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct PostSummaryView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub author_post_count: u64,
    pub created_at: String,
    pub comment_count: usize,
}

#[derive(Debug, Clone)]
pub struct CommentView {
    pub username: String,
    pub text: String,
    pub created_at: String,
}

impl From<&Comment> for CommentView {
    fn from(comment: &Comment) -> Self {
        Self {
            username: comment.username.clone(),
            text: comment.text.clone(),
            created_at: format_timestamp(&comment.created_at),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostDetailView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
    pub comments: Vec<CommentView>,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub sort_options: Vec<SortOptionView>,
    pub posts: Vec<PostSummaryView>,
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub post: PostDetailView,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub status: u16,
    pub title: &'a str,
    pub detail: &'a str,
}

/// Sort picker entries with the active key marked.
pub fn sort_options(current: SortKey) -> Vec<SortOptionView> {
    SortKey::ALL
        .into_iter()
        .map(|key| SortOptionView {
            value: key.as_str(),
            label: key.label(),
            selected: key == current,
        })
        .collect()
}

pub fn home_page(listing: &PostListing) -> HomeTemplate {
    let posts = listing
        .posts
        .iter()
        .map(|post| PostSummaryView {
            id: post.id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            author_post_count: listing.author_count(&post.author),
            created_at: format_timestamp(&post.created_at),
            comment_count: post.comments.len(),
        })
        .collect();

    HomeTemplate {
        sort_options: sort_options(listing.sort),
        posts,
    }
}

pub fn post_page(post: &Post) -> PostTemplate {
    PostTemplate {
        post: PostDetailView {
            id: post.id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            created_at: format_timestamp(&post.created_at),
            comments: post.comments.iter().map(CommentView::from).collect(),
        },
    }
}

pub fn render_home(listing: &PostListing) -> Result<String, askama::Error> {
    home_page(listing).render()
}

pub fn render_post(post: &Post) -> Result<String, askama::Error> {
    post_page(post).render()
}

pub fn render_error(status: u16, title: &str, detail: &str) -> Result<String, askama::Error> {
    ErrorTemplate {
        status,
        title,
        detail,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use inkwell_core::domain::{NewComment, NewPost};

    fn post(title: &str, author: &str, hour: u32) -> Post {
        let mut post = Post::new(NewPost::parse(title, "Some words", author).unwrap());
        post.created_at = Utc.with_ymd_and_hms(2024, 5, 1, hour, 30, 45).unwrap();
        post
    }

    #[test]
    fn timestamps_have_minute_precision() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 59).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-05-01 09:05");
    }

    #[test]
    fn sort_options_mark_current_key() {
        let options = sort_options(SortKey::TitleDesc);
        assert_eq!(options.len(), 5);
        let selected: Vec<&str> = options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected, ["title_desc"]);
    }

    #[test]
    fn home_page_annotates_counts() {
        let mut zebra = post("Zebra", "Bob", 10);
        zebra
            .comments
            .push(Comment::new(NewComment::parse("Sue", "Nice post").unwrap()));
        let listing = PostListing::from_ordered(
            SortKey::TitleAsc,
            vec![post("Apple", "Al", 11), zebra, post("Yak", "Bob", 12)],
        );

        let page = home_page(&listing);
        let titles: Vec<&str> = page.posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Apple", "Zebra", "Yak"]);
        assert_eq!(page.posts[1].author_post_count, 2);
        assert_eq!(page.posts[1].comment_count, 1);
        assert_eq!(page.posts[0].author_post_count, 1);
        assert_eq!(page.posts[0].created_at, "2024-05-01 11:30");
    }

    #[test]
    fn rendered_home_lists_posts_in_order() {
        let listing = PostListing::from_ordered(
            SortKey::TitleAsc,
            vec![post("Apple", "Al", 11), post("Zebra", "Bob", 10)],
        );

        let html = render_home(&listing).unwrap();
        let apple = html.find("Apple").unwrap();
        let zebra = html.find("Zebra").unwrap();
        assert!(apple < zebra);
        assert!(html.contains("By Al (1 posts)"));
        assert!(html.contains(r#"<option value="title_asc" selected>"#));
        assert!(html.contains(r#"action="/create_post""#));
    }

    #[test]
    fn rendered_home_without_posts() {
        let html = render_home(&PostListing::default()).unwrap();
        assert!(html.contains("No posts yet"));
    }

    #[test]
    fn rendered_post_escapes_user_content() {
        let mut post = post("<script>alert(1)</script>", "Mallory", 8);
        post.comments.push(Comment::new(
            NewComment::parse("Sue", "Nice & <b>bold</b>").unwrap(),
        ));

        let html = render_post(&post).unwrap();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("alert(1)"));
        assert!(html.contains("bold"));
        assert!(html.contains("Comments (1)"));
        assert!(html.contains(&format!(r#"action="/add_comment/{}""#, post.id)));
    }

    #[test]
    fn rendered_error_page() {
        let html = render_error(404, "Not Found", "Post with id x not found").unwrap();
        assert!(html.contains("404"));
        assert!(html.contains("Post with id x not found"));
    }
}
