//! `vitrina` — catalog viewer front door.
//!
//! Fetches the catalog, runs one query through the pipeline, prints the
//! current page and the stats panel data, and optionally exports the full
//! view to a file. The rendering layer proper lives elsewhere; this binary
//! is the headless harness around the pipeline.

use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;

use vitrina_catalog::{has_next_page, run_query};
use vitrina_core::{CategoryFilter, QueryParams, SortKey};
use vitrina_export::{export_products, ExportBanner, ExportError, ExportFormat, ExportStatus};
use vitrina_fetch::{CatalogClient, DEFAULT_BASE_URL};
use vitrina_stats::{category_breakdown, top_price_series, top_stock_series, CatalogStats};

/// Products the charts cover.
const CHART_TOP_N: usize = 7;

#[derive(Debug, Parser)]
#[command(name = "vitrina", about = "Product catalog viewer")]
struct Cli {
    /// Base URL of the catalog API.
    #[arg(long, env = "VITRINA_API", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Case-insensitive title search.
    #[arg(long, default_value = "")]
    search: String,

    /// Category value, or "all" for no restriction.
    #[arg(long, default_value = "all")]
    category: String,

    /// Sort key (price-asc, price-desc, rating-asc, rating-desc,
    /// alpha-asc, alpha-desc). Unrecognized keys leave the order untouched.
    #[arg(long, default_value = "rating-desc")]
    sort: String,

    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Render with the dark palette.
    #[arg(long)]
    dark: bool,

    /// Export the full filtered/sorted view (json, csv, excel).
    #[arg(long)]
    export: Option<String>,

    /// Directory the export file is written into.
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vitrina_observability::init();
    let cli = Cli::parse();

    let mut params = QueryParams::default()
        .with_search(cli.search)
        .with_category(CategoryFilter::parse(&cli.category))
        .with_sort(SortKey::parse(&cli.sort))
        .with_page(cli.page);
    if cli.dark {
        params = params.toggle_dark_mode();
    }

    let client = CatalogClient::new(cli.base_url);
    let store = client.load().await;

    let output = run_query(&store, &params);
    let stats = CatalogStats::compute(&output.view);

    if output.view.is_empty() {
        println!("No products found");
    } else {
        for product in &output.page {
            println!(
                "{:>4}  {:<40}  {:<16}  ${}",
                product.id,
                product.title,
                product.category,
                vitrina_core::product::number_text(product.price)
            );
        }
        println!("{}", pager_line(output.view.len(), params.page));
    }

    println!("{}", serde_json::to_string_pretty(&stats)?);
    tracing::debug!(
        stock_series = ?top_stock_series(&output.view, CHART_TOP_N),
        price_series = ?top_price_series(&output.view, CHART_TOP_N),
        categories = ?category_breakdown(&output.view),
        "chart series"
    );

    if let Some(format) = cli.export {
        let mut banner = ExportBanner::new();
        match ExportFormat::parse(&format) {
            Some(format) => export_view(&output.view, format, &cli.out, &mut banner),
            None => banner.show(
                ExportStatus::error(format!("unknown export format: {format}")),
                Utc::now(),
            ),
        }
        if let Some(status) = banner.current(Utc::now()) {
            println!("{}", status.text);
        }
    }

    Ok(())
}

/// Pager footer for a non-empty view. A page past the end is legal (the
/// slice is just empty) and is labelled as such rather than as the last page.
fn pager_line(view_len: usize, page: u32) -> String {
    let pages = vitrina_catalog::page_count(view_len);
    if page as usize > pages {
        format!("page {page} of {pages} (empty)")
    } else if has_next_page(view_len, page) {
        format!("page {page} of {pages}")
    } else {
        format!("page {page} of {pages} (last)")
    }
}

/// Export the full view and surface the outcome on the banner; every failure
/// ends here as an error message, never as a crash.
fn export_view(
    view: &[vitrina_core::Product],
    format: ExportFormat,
    out_dir: &std::path::Path,
    banner: &mut ExportBanner,
) {
    match export_products(view, format) {
        Ok(file) => {
            let path = out_dir.join(file.file_name);
            match std::fs::write(&path, &file.contents) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), mime = file.mime, "export written");
                    banner.show(
                        ExportStatus::success(format!(
                            "{} export complete: {}",
                            format.as_str().to_uppercase(),
                            path.display()
                        )),
                        Utc::now(),
                    );
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to write export file");
                    banner.show(ExportStatus::error("failed to export file"), Utc::now());
                }
            }
        }
        Err(ExportError::Empty) => {
            banner.show(ExportStatus::error("no products to export"), Utc::now());
        }
        Err(e) => {
            tracing::warn!(error = %e, "export failed");
            banner.show(ExportStatus::error("failed to export file"), Utc::now());
        }
    }
}
