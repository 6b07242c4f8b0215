// src/config/options.rs
use std::path::{Path, PathBuf};
use std::{fs, io};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub store_dir: PathBuf,
    pub logo_base: String,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(STORE_DIR).join(SETTINGS_SUBDIR),
            logo_base: s!(DEFAULT_LOGO_BASE),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
    Table,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
            ExportFormat::Table => "txt",
        }
    }

    /// Field separator; only the delimited formats have one.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json | ExportFormat::Table => None,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            "json" => Some(ExportFormat::Json),
            "table" | "txt" => Some(ExportFormat::Table),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// None → stdout
    pub out: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Table,
            include_headers: false,
            out: None,
        }
    }
}

impl AppOptions {
    /// Defaults overlaid with `OPTIONS_FILE` when it exists.
    pub fn load() -> Self {
        let mut opts = Self::default();
        if let Err(e) = opts.apply_file(Path::new(OPTIONS_FILE)) {
            logw!("Options: could not read {}: {}", OPTIONS_FILE, e);
        }
        opts
    }

    /// Apply a `key = value` file. Missing file is not an error.
    pub fn apply_file(&mut self, path: &Path) -> io::Result<()> {
        if !path.exists() {
            return Ok(());
        }
        let text = fs::read_to_string(path)?;
        self.apply_text(&text);
        logd!("Options: loaded {}", path.display());
        Ok(())
    }

    /// Unknown keys and bad values are skipped.
    pub fn apply_text(&mut self, text: &str) {
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') { continue; }
            let Some(eq) = line.find('=') else { continue };
            let key = line[..eq].trim();
            let val = line[eq + 1..].trim();
            match key {
                "store_dir" if !val.is_empty() => self.store_dir = PathBuf::from(val),
                "logo_base" if !val.is_empty() => self.logo_base = val.trim_end_matches('/').to_string(),
                "format" => {
                    if let Some(f) = ExportFormat::parse(val) { self.export.format = f; }
                }
                "include_headers" => {
                    self.export.include_headers = val == "1" || val.eq_ignore_ascii_case("true");
                }
                _ => {}
            }
        }
    }
}
