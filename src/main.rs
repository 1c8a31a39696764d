use clap::{Parser, ValueEnum};
use sitesift::{ExportFormat, ScrapeStatus, ScraperOptions, ScraperService};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sitesift")]
#[command(about = "Fetch a web page and export its structured data")]
#[command(version)]
struct Args {
    /// URL of the page to scrape
    url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Json)]
    format: FormatArg,

    /// API key for the privileged scraping API (skips the relay fallback)
    #[arg(long)]
    api_key: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Override the User-Agent sent to relay endpoints
    #[arg(long)]
    user_agent: Option<String>,

    /// Skip link extraction
    #[arg(long)]
    no_links: bool,

    /// Skip image extraction
    #[arg(long)]
    no_images: bool,

    /// Skip text extraction (headings, paragraphs, lists, tables)
    #[arg(long)]
    no_text: bool,

    /// Write the export to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Json,
    Csv,
    Xml,
    Excel,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Xml => ExportFormat::Xml,
            FormatArg::Excel => ExportFormat::Excel,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let format = ExportFormat::from(args.format);

    let mut options = ScraperOptions::default()
        .with_data_format(format)
        .with_extract_links(!args.no_links)
        .with_extract_images(!args.no_images)
        .with_extract_text(!args.no_text);
    if let Some(timeout) = args.timeout {
        options = options.with_timeout_ms(timeout);
    }
    if let Some(user_agent) = args.user_agent {
        options = options.with_user_agent(user_agent);
    }

    let service = ScraperService::with_options(options);
    let result = service.scrape_url(&args.url, args.api_key.as_deref()).await;

    if result.status == ScrapeStatus::Error {
        anyhow::bail!(
            "scrape of {} failed after {} ms: {}",
            args.url,
            result.duration,
            result.error.unwrap_or_else(|| "unknown error".to_string())
        );
    }

    let data = result
        .data
        .ok_or_else(|| anyhow::anyhow!("scrape succeeded but produced no data"))?;
    let payload = service.export(&data, format);

    log::info!(
        "scraped {} in {} ms ({} bytes as {})",
        args.url,
        result.duration,
        payload.content.len(),
        payload.mime_type
    );

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, &payload.content).await?;
            println!("wrote {} ({})", path.display(), payload.mime_type);
        }
        None => println!("{}", payload.content),
    }

    Ok(())
}
