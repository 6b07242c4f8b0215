// src/config/consts.rs

// Logos
pub const DEFAULT_LOGO_BASE: &str = "https://a.espncdn.com/i/teamlogos/ncaa/500";
pub const LOGO_EXT: &str = "png";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const SETTINGS_SUBDIR: &str = "settings";
pub const SETTING_EXT: &str = "txt";
pub const LOG_FILE: &str = ".store/debug.log";
pub const OPTIONS_FILE: &str = ".store/dynasty_hub.cfg";

// Boards
pub const TOP25_KEY: &str = "rankings_top25";
pub const BIG10_KEY: &str = "rankings_big10";

// Preview
pub const NO_LOGO: &str = "[no logo]";
pub const NO_RECORD: &str = "-";
