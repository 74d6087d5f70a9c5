pub type CodeId = u64;

/// Where a scanned code sends the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Destination {
    #[default]
    Product,
    Checkout,
}

/// One QR code resource as listed on the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    pub id: CodeId,
    pub title: String,
    pub product_title: Option<String>,
    pub destination: Destination,
    pub discount_code: Option<String>,
    pub scans: u64,
    /// RFC 3339 timestamp as reported by the backend.
    pub created_at: String,
}

impl QrCode {
    /// Route of the edit page for this code.
    pub fn edit_route(&self) -> crate::Route {
        crate::Route::new(format!("/qrcodes/{}", self.id))
    }
}
