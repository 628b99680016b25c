// src/config/consts.rs

// Sheet source
pub const SHEET_ID: &str = "1hEqvhRM6qnflV_fkqHq5jf2fDXHuDFDZCv53HYPBQeI";
pub const SHEET_GID: u32 = 0;

// Net config
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("veranda_vin/", env!("CARGO_PKG_VERSION"));

// Cache
pub const DEFAULT_TTL_SECS: u64 = 600;

// Env overrides
pub const ENV_SHEET_URL: &str = "VERANDA_SHEET_URL";
pub const ENV_SHEET_FILE: &str = "VERANDA_SHEET_FILE";
pub const ENV_CACHE_TTL: &str = "VERANDA_CACHE_TTL";
pub const ENV_LOG_LEVEL: &str = "VERANDA_LOG";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Display
pub const APP_TITLE: &str = "Veranda Vin Wine List";
pub const DEFAULT_SIZE_LABEL: &str = "MGM";
pub const UNKNOWN_GROUP_LABEL: &str = "Unknown";
pub const NO_MATCHES: &str = "No wines match the selected filters.";

// Window
pub const WINDOW_W: u32 = 1100;
pub const WINDOW_H: u32 = 760;

/// CSV export endpoint for the catalog sheet.
pub fn default_sheet_url() -> String {
    format!(
        "https://docs.google.com/spreadsheets/d/{}/export?format=csv&gid={}",
        SHEET_ID, SHEET_GID
    )
}
