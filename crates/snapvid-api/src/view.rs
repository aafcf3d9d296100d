//! Server-rendered HTML views.
//!
//! One page state per request outcome, one render function per state. All
//! interpolated values go through [`escape`], in both text and attribute
//! positions.

use snapvid_models::{NormalizedTarget, ResolutionResult};

/// Terminal page state for one landing-route request.
#[derive(Debug)]
pub enum Page {
    /// No `url` parameter: the default view with the input form.
    Landing,
    /// Validation or resolution failed; carries the user-facing message.
    Error(String),
    /// Resolution succeeded.
    Result {
        target: NormalizedTarget,
        result: ResolutionResult,
    },
}

impl Page {
    pub fn render(&self) -> String {
        match self {
            Page::Landing => render_landing(),
            Page::Error(message) => render_error(message),
            Page::Result { target, result } => render_result(target, result),
        }
    }
}

fn render_landing() -> String {
    let body = concat!(
        "<section class=\"hero\">\n",
        "<h1>Download videos from TikTok, Instagram, and YouTube</h1>\n",
        "<form action=\"/\" method=\"get\">\n",
        "<input type=\"url\" name=\"url\" placeholder=\"https://...\" required>\n",
        "<button type=\"submit\">Download</button>\n",
        "</form>\n",
        "</section>"
    );
    page_shell("SnapVid", body)
}

fn render_error(message: &str) -> String {
    let body = format!(
        "<section class=\"error\">\n\
         <p>Error: {}</p>\n\
         <a href=\"/\">Return to Home</a>\n\
         </section>",
        escape(message)
    );
    page_shell("Error", &body)
}

fn render_result(target: &NormalizedTarget, result: &ResolutionResult) -> String {
    let title = result.title.as_deref().unwrap_or("Untitled");

    let mut body = String::from("<section class=\"result\">\n");

    if let Some(thumbnail) = &result.thumbnail {
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"Video Thumbnail\">\n",
            escape(thumbnail)
        ));
    }

    body.push_str(&format!("<h2>{}</h2>\n", escape(title)));

    if let Some(duration) = &result.duration {
        body.push_str(&format!(
            "<p><strong>Duration:</strong> {}</p>\n",
            escape(duration)
        ));
    }
    if let Some(source) = &result.source {
        body.push_str(&format!(
            "<p><strong>Source:</strong> {}</p>\n",
            escape(source)
        ));
    }
    body.push_str(&format!(
        "<p><strong>Original:</strong> \
         <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Watch Now</a></p>\n",
        escape(target.as_str())
    ));

    body.push_str("<h3>Download Options</h3>\n<ul class=\"downloads\">\n");
    for media in &result.medias {
        let mut label = escape(media.label());
        if let Some(size) = &media.formatted_size {
            label.push_str(&format!(" ({})", escape(size)));
        }
        body.push_str(&format!(
            "<li><a href=\"{}\" download target=\"_blank\" rel=\"noopener noreferrer\">{}</a></li>\n",
            escape(&media.url),
            label
        ));
    }
    body.push_str("</ul>\n</section>");

    page_shell(title, &body)
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} | SnapVid</title>\n\
         </head>\n\
         <body>\n\
         <nav><a href=\"/\">SnapVid</a></nav>\n\
         {}\n\
         </body>\n\
         </html>\n",
        escape(title),
        body
    )
}

/// Minimal HTML escaping, safe for text and double-quoted attributes.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use snapvid_models::MediaOption;

    use super::*;

    #[test]
    fn landing_page_has_input_form() {
        let html = Page::Landing.render();
        assert!(html.contains("<form action=\"/\" method=\"get\">"));
        assert!(html.contains("name=\"url\""));
    }

    #[test]
    fn error_page_shows_message_and_home_link() {
        let html = Page::Error("rate limited".to_string()).render();
        assert!(html.contains("Error: rate limited"));
        assert!(html.contains("<a href=\"/\">Return to Home</a>"));
    }

    #[test]
    fn result_page_renders_all_fields() {
        let page = Page::Result {
            target: NormalizedTarget::parse("https://youtu.be/abc").unwrap(),
            result: ResolutionResult {
                title: Some("T".to_string()),
                thumbnail: Some("https://cdn.example/t.jpg".to_string()),
                duration: Some("1:23".to_string()),
                source: Some("youtube".to_string()),
                medias: vec![MediaOption {
                    url: "u1".to_string(),
                    quality: Some("720p".to_string()),
                    formatted_size: Some("12 MB".to_string()),
                }],
            },
        };
        let html = page.render();
        assert!(html.contains("<h2>T</h2>"));
        assert!(html.contains("src=\"https://cdn.example/t.jpg\""));
        assert!(html.contains("Duration:</strong> 1:23"));
        assert!(html.contains("Source:</strong> youtube"));
        assert!(html.contains("href=\"https://youtu.be/abc\""));
        assert!(html.contains(">720p (12 MB)</a>"));
    }

    #[test]
    fn absent_fields_are_omitted_not_rendered() {
        let page = Page::Result {
            target: NormalizedTarget::parse("https://youtu.be/abc").unwrap(),
            result: ResolutionResult {
                medias: vec![MediaOption {
                    url: "u1".to_string(),
                    quality: None,
                    formatted_size: None,
                }],
                ..ResolutionResult::default()
            },
        };
        let html = page.render();
        assert!(html.contains("<h2>Untitled</h2>"));
        assert!(!html.contains("Duration:"));
        assert!(!html.contains("Source:"));
        assert!(!html.contains("<img"));
        assert!(html.contains(">Download</a>"));
    }

    #[test]
    fn markup_in_upstream_values_is_escaped() {
        let page = Page::Result {
            target: NormalizedTarget::parse("https://youtu.be/abc").unwrap(),
            result: ResolutionResult {
                title: Some("<script>alert(1)</script>".to_string()),
                ..ResolutionResult::default()
            },
        };
        let html = page.render();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
