use thiserror::Error;

use vitrina_core::Product;

/// Export failure, terminal at this boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The current view has nothing in it; no file is produced.
    #[error("no products to export")]
    Empty,

    /// Any failure inside a format encoder, reported generically.
    #[error("export failed: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e.to_string())
    }
}

/// Selectable export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Excel,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "excel" => Some(Self::Excel),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Excel => "excel",
        }
    }
}

/// A named, typed file blob ready for delivery (download / disk write).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub contents: Vec<u8>,
}

/// Serialize the full view in the selected format.
///
/// The empty view is rejected up front; everything else that can go wrong in
/// an encoder surfaces as a generic [`ExportError::Serialize`].
pub fn export_products(view: &[Product], format: ExportFormat) -> Result<ExportFile, ExportError> {
    if view.is_empty() {
        return Err(ExportError::Empty);
    }

    match format {
        ExportFormat::Json => Ok(ExportFile {
            file_name: "productos.json",
            mime: "application/json",
            contents: serde_json::to_vec_pretty(view)?,
        }),
        ExportFormat::Csv => Ok(ExportFile {
            file_name: "productos.csv",
            mime: "text/csv",
            contents: to_csv(view).into_bytes(),
        }),
        ExportFormat::Excel => Ok(ExportFile {
            file_name: "productos.xls",
            mime: "application/vnd.ms-excel",
            contents: to_spreadsheet_xml(view).into_bytes(),
        }),
    }
}

// Header row is the record's field names in declaration order; every value
// is double-quote wrapped with internal quotes doubled.
fn to_csv(view: &[Product]) -> String {
    let mut rows = Vec::with_capacity(view.len() + 1);
    rows.push(Product::FIELD_NAMES.join(","));
    for product in view {
        let cells: Vec<String> = product
            .field_texts()
            .iter()
            .map(|v| format!("\"{}\"", v.replace('"', "\"\"")))
            .collect();
        rows.push(cells.join(","));
    }
    rows.join("\n")
}

// Minimal SpreadsheetML 2003 document: one worksheet, every cell text-typed.
fn to_spreadsheet_xml(view: &[Product]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\"?>\n\
         <Workbook xmlns=\"urn:schemas-microsoft-com:office:spreadsheet\"\n\
         \x20 xmlns:o=\"urn:schemas-microsoft-com:office:office\"\n\
         \x20 xmlns:x=\"urn:schemas-microsoft-com:office:excel\"\n\
         \x20 xmlns:ss=\"urn:schemas-microsoft-com:office:spreadsheet\">\n\
         <Worksheet ss:Name=\"Productos\">\n<Table>\n",
    );

    xml.push_str("<Row>");
    for name in Product::FIELD_NAMES {
        push_cell(&mut xml, name);
    }
    xml.push_str("</Row>\n");

    for product in view {
        xml.push_str("<Row>");
        for value in product.field_texts() {
            push_cell(&mut xml, &value);
        }
        xml.push_str("</Row>\n");
    }

    xml.push_str("</Table>\n</Worksheet>\n</Workbook>\n");
    xml
}

// Only `&` and `<` are entity-escaped in cell text.
fn push_cell(xml: &mut String, text: &str) {
    xml.push_str("<Cell><Data ss:Type=\"String\">");
    xml.push_str(&text.replace('&', "&amp;").replace('<', "&lt;"));
    xml.push_str("</Data></Cell>");
}
