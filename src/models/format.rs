/// Barcode symbology that a result was decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeFormat {
    /// Aztec 2D format
    Aztec,
    /// CODABAR 1D format
    Codabar,
    /// Code 39 1D format
    Code39,
    /// Code 93 1D format
    Code93,
    /// Code 128 1D format
    Code128,
    /// Data Matrix 2D format
    DataMatrix,
    /// EAN-8 1D format
    Ean8,
    /// EAN-13 1D format
    Ean13,
    /// ITF (Interleaved Two of Five) 1D format
    Itf,
    /// MaxiCode 2D format
    MaxiCode,
    /// PDF417 stacked format
    Pdf417,
    /// QR Code 2D format
    QrCode,
    /// RSS-14 1D format
    Rss14,
    /// RSS Expanded 1D format
    RssExpanded,
    /// UPC-A 1D format
    UpcA,
    /// UPC-E 1D format
    UpcE,
    /// UPC/EAN extension (EAN-2/EAN-5 supplemental)
    UpcEanExtension,
}

impl BarcodeFormat {
    /// Check if this is a two-dimensional (matrix or stacked) symbology
    pub fn is_two_dimensional(&self) -> bool {
        matches!(
            self,
            BarcodeFormat::Aztec
                | BarcodeFormat::DataMatrix
                | BarcodeFormat::MaxiCode
                | BarcodeFormat::Pdf417
                | BarcodeFormat::QrCode
        )
    }
}
