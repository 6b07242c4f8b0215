// src/export.rs
use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::fs;

use crate::config::consts::{NO_LOGO, NO_RECORD};
use crate::config::options::{ExportFormat, ExportOptions};
use crate::rankings::RankEntry;

/* ---------------- Shaping ---------------- */

pub fn headers(include_conference: bool) -> Vec<String> {
    let mut h = vec![s!("Rank"), s!("Team"), s!("Overall")];
    if include_conference { h.push(s!("Conf")); }
    h.push(s!("Logo"));
    h
}

/// One row per entry, same column shape as `headers`. Missing values are empty.
pub fn rows(entries: &[RankEntry], include_conference: bool) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|e| {
            let mut r = vec![e.rank.to_string(), e.name.clone(), opt_cell!(e.overall)];
            if include_conference { r.push(opt_cell!(e.conf)); }
            r.push(opt_cell!(e.logo));
            r
        })
        .collect()
}

/* ---------------- Delimited ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

pub fn to_delimited(
    entries: &[RankEntry],
    include_conference: bool,
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &headers(include_conference), sep);
    }
    for r in rows(entries, include_conference) {
        let _ = write_row(&mut buf, &r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/* ---------------- Preview table ---------------- */

/// Fixed-width text table for terminals and the editor preview.
/// Missing records show as `-`, missing logos as a placeholder.
pub fn to_table(entries: &[RankEntry], include_conference: bool) -> String {
    let mut cols = headers(include_conference);
    let body: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            let mut r = vec![e.rank.to_string(), e.name.clone(), opt_cell!(e.overall, NO_RECORD)];
            if include_conference { r.push(opt_cell!(e.conf, NO_RECORD)); }
            r.push(opt_cell!(e.logo, NO_LOGO));
            r
        })
        .collect();

    let mut widths: Vec<usize> = cols.iter().map(|c| c.chars().count()).collect();
    for r in &body {
        for (i, cell) in r.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = s!();
    let mut push_line = |cells: &[String]| {
        let last = cells.len() - 1;
        for (i, cell) in cells.iter().enumerate() {
            out.push_str(cell);
            if i < last {
                let pad = widths[i] - cell.chars().count() + 2;
                out.extend(std::iter::repeat_n(' ', pad));
            }
        }
        out.push('\n');
    };

    push_line(&cols);
    cols = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&cols);
    for r in &body { push_line(r); }
    out
}

/* ---------------- Dispatch ---------------- */

pub fn render(
    entries: &[RankEntry],
    include_conference: bool,
    opts: &ExportOptions,
) -> Result<String, Box<dyn Error>> {
    Ok(match opts.format {
        ExportFormat::Json => {
            let mut s = serde_json::to_string_pretty(entries)?;
            s.push('\n');
            s
        }
        ExportFormat::Table => to_table(entries, include_conference),
        ExportFormat::Csv | ExportFormat::Tsv => {
            let sep = opts.format.delim().unwrap_or(',');
            to_delimited(entries, include_conference, opts.include_headers, sep)
        }
    })
}

/// Render and write to `path`, creating parent directories.
/// A path without an extension gets the format's one. Returns the path written to.
pub fn write_export(
    entries: &[RankEntry],
    include_conference: bool,
    opts: &ExportOptions,
    path: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = if path.extension().is_none() {
        path.with_extension(opts.format.ext())
    } else {
        path.to_path_buf()
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let contents = render(entries, include_conference, opts)?;
    fs::write(&path, contents).map_err(|e| format!("Writing {}: {}", path.display(), e))?;
    logf!("Export: {} entries → {} ({:?})", entries.len(), path.display(), opts.format);
    Ok(path)
}
