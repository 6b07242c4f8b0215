// src/store.rs
//
// Raw-text settings, keyed by setting id ("rankings_top25", ...).
//
// Only the pasted text is ever stored. Parsed entries are derived on every
// read (see board.rs), so a parser fix applies to old rankings for free.

use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;
use std::{fs, io};

use crate::config::consts::SETTING_EXT;
use crate::core::sanitize::is_setting_key;

pub trait SettingsStore {
    /// Raw text for `key`, `None` if never saved.
    fn load(&self, key: &str) -> Result<Option<String>, Box<dyn Error>>;
    fn save(&mut self, key: &str, raw: &str) -> Result<(), Box<dyn Error>>;
    /// Returns whether anything was removed.
    fn delete(&mut self, key: &str) -> Result<bool, Box<dyn Error>>;
    /// Saved keys, sorted.
    fn keys(&self) -> Result<Vec<String>, Box<dyn Error>>;
}

fn check_key(key: &str) -> Result<(), Box<dyn Error>> {
    if is_setting_key(key) {
        Ok(())
    } else {
        Err(format!("Invalid setting key: {:?} (use letters, digits, '_' or '-')", key).into())
    }
}

/* ---------------- File-backed ---------------- */

/// One `<key>.txt` per setting under `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.{SETTING_EXT}"))
    }

    fn ensure_root(&self) -> Result<(), Box<dyn Error>> {
        if self.root.exists() && !self.root.is_dir() {
            return Err(format!("Path exists but is not a directory: {}", self.root.display()).into());
        }
        if !self.root.exists() { fs::create_dir_all(&self.root)?; }
        Ok(())
    }
}

impl SettingsStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        check_key(key)?;
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(text) => {
                logd!("Store: load {} ({} bytes)", path.display(), text.len());
                Ok(Some(text))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(format!("Reading {}: {}", path.display(), e).into()),
        }
    }

    fn save(&mut self, key: &str, raw: &str) -> Result<(), Box<dyn Error>> {
        check_key(key)?;
        self.ensure_root()?;
        let path = self.path_for(key);
        fs::write(&path, raw).map_err(|e| format!("Writing {}: {}", path.display(), e))?;
        logf!("Store: saved {} ({} bytes)", path.display(), raw.len());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<bool, Box<dyn Error>> {
        check_key(key)?;
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => {
                logf!("Store: deleted {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(format!("Deleting {}: {}", path.display(), e).into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>, Box<dyn Error>> {
        if !self.root.exists() { return Ok(Vec::new()); }

        let mut out = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_file() { continue; }
            if path.extension().and_then(|s| s.to_str()) != Some(SETTING_EXT) { continue; }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if is_setting_key(stem) { out.push(stem.to_string()); }
            }
        }
        out.sort();
        Ok(out)
    }
}

/* ---------------- In-memory ---------------- */

#[derive(Default, Clone, Debug)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
}

impl SettingsStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        check_key(key)?;
        Ok(self.items.get(key).cloned())
    }

    fn save(&mut self, key: &str, raw: &str) -> Result<(), Box<dyn Error>> {
        check_key(key)?;
        self.items.insert(key.to_string(), raw.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<bool, Box<dyn Error>> {
        check_key(key)?;
        Ok(self.items.remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<String>, Box<dyn Error>> {
        Ok(self.items.keys().cloned().collect())
    }
}
