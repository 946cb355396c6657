// file: src/ui/messages.rs
// description: user facing strings

pub const SEARCHING: &str = "Hledám…";
pub const NOTHING_FOUND: &str = "Nic nenalezeno.";
pub const SEARCH_FAILED: &str = "Chyba vyhledávání.";
pub const UNTITLED: &str = "(bez názvu)";
pub const ENTER_QUERY_FIRST: &str = "Nejprve zadejte dotaz.";
pub const DOWNLOAD_FAILED: &str = "Download failed";

pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noopener noreferrer";
pub const EXPORT_UNAVAILABLE: &str = "Export je dostupný až po vyhledávání s výsledky.";
