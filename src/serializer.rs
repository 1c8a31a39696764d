//! Export rendering for scraped data.
//!
//! `serialize` never propagates an error past its boundary: the only fallible
//! branch (JSON) is caught and rendered as a diagnostic string.
//!
//! The XML form is deliberately partial: url, title, timestamp, description,
//! author, headings, and paragraphs only. Links, images, lists, and tables
//! are not represented in XML, unlike JSON and CSV. The Excel format reuses
//! the CSV renderer under a spreadsheet MIME type; no binary workbook is
//! generated.

use crate::error::ScrapeError;
use crate::model::ScrapedData;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    Xml,
    Excel,
}

impl ExportFormat {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Xml => "xml",
            ExportFormat::Excel => "excel",
        }
    }

    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xml => "application/xml",
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Xml => "xml",
            ExportFormat::Excel => "xlsx",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "xml" => Ok(ExportFormat::Xml),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            other => Err(ScrapeError::Serialization(format!(
                "unknown export format '{other}'"
            ))),
        }
    }
}

/// Render `data` in the requested format. Always returns text: internal
/// failures become a best-effort diagnostic string instead of an error.
#[must_use]
pub fn serialize(data: &ScrapedData, format: ExportFormat) -> String {
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(data)
            .unwrap_or_else(|e| format!("serialization failed: {e}")),
        ExportFormat::Csv | ExportFormat::Excel => to_csv(data),
        ExportFormat::Xml => to_xml(data),
    }
}

/// Flattened CSV report: a preamble of document fields, then uppercase
/// section blocks separated by blank rows. Sections with no source entries
/// are omitted entirely. Every cell is quoted with internal quotes doubled.
fn to_csv(data: &ScrapedData) -> String {
    let mut rows: Vec<Vec<String>> = vec![
        vec!["URL".into(), data.url.clone()],
        vec!["Title".into(), data.title.clone()],
        vec!["Timestamp".into(), data.timestamp.clone()],
        vec!["Description".into(), data.metadata.description.clone()],
        vec!["Author".into(), data.metadata.author.clone()],
        vec![],
    ];

    if let Some(headings) = data.content.headings.as_deref().filter(|h| !h.is_empty()) {
        rows.push(vec!["HEADINGS".into()]);
        rows.push(vec!["Level".into(), "Text".into()]);
        for heading in headings {
            rows.push(vec![heading.level.to_string(), heading.text.clone()]);
        }
        rows.push(vec![]);
    }

    if let Some(paragraphs) = data
        .content
        .paragraphs
        .as_deref()
        .filter(|p| !p.is_empty())
    {
        rows.push(vec!["PARAGRAPHS".into()]);
        for (index, paragraph) in paragraphs.iter().enumerate() {
            rows.push(vec![format!("Paragraph {}", index + 1), paragraph.clone()]);
        }
        rows.push(vec![]);
    }

    if let Some(links) = data.content.links.as_deref().filter(|l| !l.is_empty()) {
        rows.push(vec!["LINKS".into()]);
        rows.push(vec!["Text".into(), "URL".into(), "Internal".into()]);
        for link in links {
            rows.push(vec![
                link.text.clone(),
                link.url.clone(),
                link.is_internal.to_string(),
            ]);
        }
        rows.push(vec![]);
    }

    if let Some(images) = data.content.images.as_deref().filter(|i| !i.is_empty()) {
        rows.push(vec!["IMAGES".into()]);
        rows.push(vec![
            "Alt Text".into(),
            "Source".into(),
            "Width".into(),
            "Height".into(),
        ]);
        for image in images {
            rows.push(vec![
                image.alt.clone(),
                image.src.clone(),
                image.width.map(|w| w.to_string()).unwrap_or_default(),
                image.height.map(|h| h.to_string()).unwrap_or_default(),
            ]);
        }
        rows.push(vec![]);
    }

    if let Some(lists) = data.content.lists.as_deref().filter(|l| !l.is_empty()) {
        rows.push(vec!["LISTS".into()]);
        for (list_index, list) in lists.iter().enumerate() {
            rows.push(vec![format!("List {} ({})", list_index + 1, list.kind)]);
            for (item_index, item) in list.items.iter().enumerate() {
                rows.push(vec![format!("Item {}", item_index + 1), item.clone()]);
            }
            rows.push(vec![]);
        }
    }

    if let Some(tables) = data.content.tables.as_deref().filter(|t| !t.is_empty()) {
        rows.push(vec!["TABLES".into()]);
        for (table_index, table) in tables.iter().enumerate() {
            rows.push(vec![format!("Table {}", table_index + 1)]);
            if !table.headers.is_empty() {
                rows.push(table.headers.clone());
            }
            for row in &table.rows {
                rows.push(row.clone());
            }
            rows.push(vec![]);
        }
    }

    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!("\"{}\"", cell.replace('"', "\"\"")))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Minimal hand-built XML document. See the module docs for which fields are
/// represented.
fn to_xml(data: &ScrapedData) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<scrapeResult>\n");

    let _ = writeln!(xml, "  <url>{}</url>", escape_xml(&data.url));
    let _ = writeln!(xml, "  <title>{}</title>", escape_xml(&data.title));
    let _ = writeln!(xml, "  <timestamp>{}</timestamp>", data.timestamp);

    xml.push_str("  <metadata>\n");
    if !data.metadata.description.is_empty() {
        let _ = writeln!(
            xml,
            "    <description>{}</description>",
            escape_xml(&data.metadata.description)
        );
    }
    if !data.metadata.author.is_empty() {
        let _ = writeln!(
            xml,
            "    <author>{}</author>",
            escape_xml(&data.metadata.author)
        );
    }
    xml.push_str("  </metadata>\n");

    xml.push_str("  <content>\n");
    if let Some(headings) = data.content.headings.as_deref().filter(|h| !h.is_empty()) {
        xml.push_str("    <headings>\n");
        for heading in headings {
            let _ = writeln!(
                xml,
                "      <heading level=\"{}\">{}</heading>",
                heading.level,
                escape_xml(&heading.text)
            );
        }
        xml.push_str("    </headings>\n");
    }
    if let Some(paragraphs) = data
        .content
        .paragraphs
        .as_deref()
        .filter(|p| !p.is_empty())
    {
        xml.push_str("    <paragraphs>\n");
        for paragraph in paragraphs {
            let _ = writeln!(
                xml,
                "      <paragraph>{}</paragraph>",
                escape_xml(paragraph)
            );
        }
        xml.push_str("    </paragraphs>\n");
    }
    xml.push_str("  </content>\n");

    xml.push_str("</scrapeResult>");
    xml
}

fn escape_xml(unsafe_text: &str) -> String {
    let mut escaped = String::with_capacity(unsafe_text.len());
    for c in unsafe_text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
