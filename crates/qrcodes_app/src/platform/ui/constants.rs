pub const KEY_CREATE: &str = "n";
pub const KEY_REFRESH: &str = "r";
pub const KEY_QUIT: &str = "q";

pub const EMPTY_HEADING: &str = "Create unique QR codes for your product";
pub const EMPTY_BODY: &str = "Allow customers to scan codes and buy products using their phones.";
pub const UPDATING_MARKER: &str = "(updating…)";
pub const HELP_LINE: &str = "Commands: n = create, r = refresh, <row> = open, q = quit";

pub const SKELETON_WIDTHS: [usize; 3] = [36, 24, 30];
pub const RULE_WIDTH: usize = 72;
pub const TITLE_WIDTH: usize = 24;
pub const PRODUCT_WIDTH: usize = 18;
