//! The fixed dependency catalog.
//!
//! Everything here is a compile-time constant. Entry order is display order
//! and is shared by the bulleted list and the install command.

use serde::Serialize;

/// A third-party library the PDF pipeline depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LibraryEntry {
    /// Package name as passed to pip
    pub name: &'static str,

    /// What the library is used for (documentation only)
    pub purpose: &'static str,
}

impl LibraryEntry {
    /// Create an entry; usable in `const` catalogs
    pub const fn new(name: &'static str, purpose: &'static str) -> Self {
        Self { name, purpose }
    }
}

/// Libraries required for PDF processing, in display order
pub const REQUIRED_LIBRARIES: &[LibraryEntry] = &[
    LibraryEntry::new("PyPDF2", "PDF読み込み"),
    LibraryEntry::new("pdf2image", "PDFを画像に変換"),
    LibraryEntry::new("Pillow", "画像処理"),
    LibraryEntry::new("opencv-python", "コンピュータビジョン"),
    LibraryEntry::new("scikit-learn", "機械学習（色分析など）"),
    LibraryEntry::new("numpy", "数値計算"),
    LibraryEntry::new("matplotlib", "可視化"),
    LibraryEntry::new("pytesseract", "OCR"),
];

/// Setup steps that have to be done by hand
const ADDITIONAL_SETUP: &[&str] = &[
    "Tesseract OCRエンジンのインストール",
    "Poppler（pdf2imageに必要）のインストール",
    "OpenCVの設定",
];

/// Analysis features the libraries are meant to enable
const CAPABILITIES: &[&str] = &[
    "レイアウト検出",
    "色彩分析",
    "テキスト抽出",
    "チャート検出",
    "デザインパターン分類",
];

/// Everything the report is rendered from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    /// Report title
    pub title: &'static str,

    /// Libraries, in display order
    pub libraries: &'static [LibraryEntry],

    /// Manual setup steps
    pub additional_setup: &'static [&'static str],

    /// Capability lines
    pub capabilities: &'static [&'static str],
}

impl Catalog {
    /// The catalog shipped with the tool
    pub const STANDARD: Catalog = Catalog {
        title: "PDF処理システムのセットアップ",
        libraries: REQUIRED_LIBRARIES,
        additional_setup: ADDITIONAL_SETUP,
        capabilities: CAPABILITIES,
    };

    /// Library names in display order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.libraries.iter().map(|lib| lib.name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::STANDARD
    }
}
