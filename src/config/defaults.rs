//! Default configuration values

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent sent to Mapbox
pub const DEFAULT_USER_AGENT: &str = concat!("drive-distance/", env!("CARGO_PKG_VERSION"));

/// Default distance unit
pub const DEFAULT_UNIT: &str = "miles";

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "drive-distance";
