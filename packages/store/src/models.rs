//! # Page-local records
//!
//! Every page in the app renders its own list of records. None of these lists
//! are shared between pages and none outlive a reload; the only invariant is
//! that `id` is unique within the list that holds it.
//!
//! | Struct | Page |
//! |--------|------|
//! | [`CatalogEntry`] | Catalog grid |
//! | [`SearchResult`] | Search results |
//! | [`UploadFile`] | Upload queue |
//! | [`Stat`], [`MonthlyActivity`] | Analytics dashboard |
//!
//! All of them are `Deserialize` so they can be seeded from `seed.toml`
//! (see [`crate::config`]).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A catalogued item shown on the catalog page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub subjects: Vec<String>,
    /// Date the entry was added to the catalog.
    pub added: NaiveDate,
}

impl CatalogEntry {
    /// Human-readable added date: "Mar 1, 2024".
    pub fn added_display(&self) -> String {
        self.added.format("%b %-d, %Y").to_string()
    }
}

/// A hit on the search page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub subjects: Vec<String>,
    /// Material type, e.g. "Book".
    pub kind: String,
    /// Relevance score in percent.
    pub relevance: u8,
}

/// Processing state of an uploaded file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Processing,
    Complete,
}

/// Coarse file type, used to pick an icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Image,
    Pdf,
}

impl FileKind {
    /// Classify a file by its MIME type. Anything that is not an image is
    /// treated as a PDF.
    pub fn from_mime(mime: &str) -> Self {
        if mime.contains("image") {
            FileKind::Image
        } else {
            FileKind::Pdf
        }
    }
}

/// Best-effort MIME type from a file name's extension. The browser file
/// engine only hands over names, so this stands in for the real type.
pub fn guess_mime(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("tif" | "tiff") => "image/tiff",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// A file in the upload queue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadFile {
    pub id: u64,
    pub name: String,
    pub status: FileStatus,
    pub kind: FileKind,
}

/// A headline figure on the analytics dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub id: u64,
    pub name: String,
    /// Pre-formatted display value ("2,345", "98.5%").
    pub value: String,
}

/// Cataloging activity for one month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyActivity {
    pub month: String,
    pub books: u32,
    pub subjects: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_from_mime() {
        assert_eq!(FileKind::from_mime("image/png"), FileKind::Image);
        assert_eq!(FileKind::from_mime("image/jpeg"), FileKind::Image);
        assert_eq!(FileKind::from_mime("application/pdf"), FileKind::Pdf);
        assert_eq!(FileKind::from_mime(""), FileKind::Pdf);
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime("cover.JPG"), "image/jpeg");
        assert_eq!(guess_mime("scan.tiff"), "image/tiff");
        assert_eq!(guess_mime("copyright-page.pdf"), "application/pdf");
        assert_eq!(guess_mime("README"), "application/octet-stream");
        assert_eq!(FileKind::from_mime(guess_mime("a.png")), FileKind::Image);
    }

    #[test]
    fn test_added_display() {
        let entry = CatalogEntry {
            id: 1,
            title: "T".to_string(),
            author: "A".to_string(),
            subjects: vec![],
            added: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert_eq!(entry.added_display(), "Mar 1, 2024");
    }
}
