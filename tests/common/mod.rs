//! Test fixtures shared across the sitesift test suite.

use sitesift::{Heading, Link, PageContent, PageMetadata, ScrapedData};

/// Wraps a body in a minimal HTML document with the given title.
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// A document exercising every metadata rule: description fallback chain,
/// keywords, author, og:/twitter: maps with a duplicate, and a relative
/// favicon.
#[allow(dead_code)]
pub fn create_metadata_html() -> String {
    r#"<!DOCTYPE html>
<html>
<head>
    <title>Metadata Page</title>
    <meta name="description" content="Primary description">
    <meta property="og:description" content="OG description">
    <meta name="keywords" content="rust, scraping , ,extraction">
    <meta name="author" content="Jordan Example">
    <meta property="og:title" content="First OG Title">
    <meta property="og:title" content="Second OG Title">
    <meta property="og:image" content="https://a.com/og.png">
    <meta name="twitter:card" content="summary">
    <meta name="twitter:site" content="@example">
    <link rel="icon" href="/favicon.ico">
</head>
<body><p>Body</p></body>
</html>"#
        .to_string()
}

/// A document exercising every content rule: headings, paragraphs, links
/// (relative, absolute, skippable), images, lists, and tables.
#[allow(dead_code)]
pub fn create_content_html() -> String {
    r##"<!DOCTYPE html>
<html>
<head><title>Content Page</title></head>
<body>
    <h1>Main Heading</h1>
    <h2>   </h2>
    <h3>Sub Heading</h3>
    <p>First paragraph.</p>
    <p>   </p>
    <p>Second paragraph.</p>
    <a href="/about">About</a>
    <a href="https://other.org/page">Elsewhere</a>
    <a href="javascript:void(0)">Nope</a>
    <a href="#">Top</a>
    <a href="">Empty</a>
    <img src="/logo.png" alt="Logo" width="120" height="60">
    <img src="https://cdn.example.net/pic.jpg" alt="">
    <img src="data:image/png;base64,AAAA" alt="Inline">
    <ul>
        <li>Alpha</li>
        <li>Beta</li>
    </ul>
    <ol>
        <li>One</li>
    </ol>
    <ul><li>   </li></ul>
    <table>
        <tr><th>Name</th><th>Value</th></tr>
        <tr><td>Item 1</td><td>100</td></tr>
        <tr><td>Item 2</td><td>200</td></tr>
    </table>
    <table>
        <tr><td>decorative layout cell</td></tr>
    </table>
</body>
</html>"##
        .to_string()
}

/// A fully populated ScrapedData for serializer tests, built by hand so
/// expectations are independent of the extractor.
#[allow(dead_code)]
pub fn sample_data() -> ScrapedData {
    ScrapedData {
        url: "https://a.com".to_string(),
        title: "Sample".to_string(),
        timestamp: "2026-08-27T12:00:00.000Z".to_string(),
        metadata: PageMetadata {
            description: "A sample page".to_string(),
            author: "Jordan Example".to_string(),
            ..PageMetadata::default()
        },
        content: PageContent {
            headings: Some(vec![Heading {
                level: 1,
                text: "Hello".to_string(),
            }]),
            paragraphs: Some(Vec::new()),
            links: Some(vec![Link {
                text: "docs".to_string(),
                url: "https://a.com/docs".to_string(),
                is_internal: true,
            }]),
            ..PageContent::default()
        },
    }
}
