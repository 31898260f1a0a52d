//! `vitrina-export` — file export of the filtered/sorted product view.
//!
//! Serializes the full view (not just the current page) into one of three
//! formats and hands back a named file blob; the caller decides how to
//! deliver it. All failures stop at this boundary: the caller only ever sees
//! an [`ExportError`], which the UI turns into a transient banner.

pub mod banner;
pub mod exporter;

pub use banner::{BannerKind, ExportBanner, ExportStatus};
pub use exporter::{export_products, ExportError, ExportFile, ExportFormat};
