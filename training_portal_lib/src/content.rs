//! Pure text helpers consumed when rendering offerings and recordings.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static DRIVE_FILE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/d/([^/]+)").expect("drive id pattern is valid"));
static IMAGE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(jpeg|jpg|gif|png|webp|svg)($|\?)").expect("image pattern is valid")
});
static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("url pattern is valid"));

/// Rewrites a shareable Drive file link into a direct-view image URL.
///
/// Any other URL is returned unchanged.
pub fn direct_image_url(url: &str) -> Cow<'_, str> {
    if url.contains("drive.google.com") && (url.contains("/view") || url.contains("/file/d/")) {
        if let Some(id) = DRIVE_FILE_ID.captures(url).and_then(|cap| cap.get(1)) {
            return Cow::Owned(format!(
                "https://drive.google.com/uc?export=view&id={}",
                id.as_str()
            ));
        }
    }
    Cow::Borrowed(url)
}

/// How a block of free text should be displayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RenderedContent {
    /// The whole block is a single image URL.
    Image(String),
    /// Text with embedded links split out.
    Text(Vec<Segment>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Segment {
    Plain(String),
    Link(String),
}

impl Segment {
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Plain(s) | Segment::Link(s) => s,
        }
    }
}

/// Classifies `text` as an image or as linkified text.
///
/// For text, concatenating the segments reproduces the input exactly,
/// line breaks included.
pub fn render_content(text: &str) -> RenderedContent {
    let trimmed = text.trim();
    if is_image_url(trimmed) {
        return RenderedContent::Image(trimmed.to_string());
    }

    let mut segments = Vec::new();
    let mut last = 0;
    for m in URL.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Plain(text[last..m.start()].to_string()));
        }
        segments.push(Segment::Link(m.as_str().to_string()));
        last = m.end();
    }
    if last < text.len() {
        segments.push(Segment::Plain(text[last..].to_string()));
    }
    RenderedContent::Text(segments)
}

fn is_image_url(candidate: &str) -> bool {
    !candidate.is_empty()
        && !candidate.contains(char::is_whitespace)
        && IMAGE_SUFFIX.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_share_link_is_rewritten() {
        assert_eq!(
            direct_image_url("https://drive.google.com/file/d/ABC123/view"),
            "https://drive.google.com/uc?export=view&id=ABC123"
        );
    }

    #[test]
    fn drive_open_link_without_file_segment_is_kept() {
        let url = "https://drive.google.com/open?id=XYZ";
        assert!(matches!(direct_image_url(url), Cow::Borrowed(_)));
    }

    #[test]
    fn ordinary_urls_are_unchanged() {
        assert_eq!(
            direct_image_url("https://example.com/logo.png"),
            "https://example.com/logo.png"
        );
        assert_eq!(direct_image_url(""), "");
    }

    #[test]
    fn bare_image_url_renders_as_image() {
        assert_eq!(
            render_content("  https://cdn.example.com/slide.PNG?w=800\n"),
            RenderedContent::Image("https://cdn.example.com/slide.PNG?w=800".to_string())
        );
    }

    #[test]
    fn sentence_mentioning_image_is_text() {
        assert!(matches!(
            render_content("See the chart at https://example.com/chart.png today"),
            RenderedContent::Text(_)
        ));
    }

    #[test]
    fn links_are_split_and_text_preserved() {
        let text = "Watch here:\nhttps://youtu.be/abc123\nSlides: http://example.com/deck end";
        let RenderedContent::Text(segments) = render_content(text) else {
            panic!("expected text");
        };
        assert_eq!(
            segments,
            vec![
                Segment::Plain("Watch here:\n".to_string()),
                Segment::Link("https://youtu.be/abc123".to_string()),
                Segment::Plain("\nSlides: ".to_string()),
                Segment::Link("http://example.com/deck".to_string()),
                Segment::Plain(" end".to_string()),
            ]
        );
        let joined: String = segments.iter().map(Segment::as_str).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn plain_text_is_single_segment() {
        assert_eq!(
            render_content("No links here."),
            RenderedContent::Text(vec![Segment::Plain("No links here.".to_string())])
        );
        assert_eq!(render_content(""), RenderedContent::Text(vec![]));
    }
}
