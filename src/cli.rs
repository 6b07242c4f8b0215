// src/cli.rs
use std::error::Error;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::fs;

use crate::board::Board;
use crate::config::options::{AppOptions, ExportFormat};
use crate::export;
use crate::logos::LogoResolver;
use crate::rankings::{self, RankEntry};
use crate::store::{FileStore, SettingsStore};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Parse { input: Input, conf: bool },
    Show { key: String, conf: bool },
    Save { key: String, input: Input },
    Delete { key: String },
    List,
    Logo { names: Vec<String> },
    CheckAliases,
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub options: AppOptions,
}

fn parse_input(v: Option<String>) -> Input {
    match v {
        None => Input::Stdin,
        Some(s) if s == "-" => Input::Stdin,
        Some(s) => Input::File(PathBuf::from(s)),
    }
}

/// Parse arguments (program name already skipped) on top of `options`.
pub fn parse_args<I>(args: I, mut options: AppOptions) -> Result<Invocation, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut verb: Option<String> = None;
    let mut positional: Vec<String> = Vec::new();
    let mut conf = false;

    while let Some(a) = args.next() {
        match a.as_str() {
            "--store" => {
                options.store_dir = PathBuf::from(args.next().ok_or("Missing value for --store")?);
            }
            "--logo-base" => {
                let v = args.next().ok_or("Missing value for --logo-base")?;
                options.logo_base = v.trim_end_matches('/').to_string();
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                options.export.format = ExportFormat::parse(&v)
                    .ok_or_else(|| format!("Unknown format: {}", v))?;
            }
            "--headers" => options.export.include_headers = true,
            "--conf" => conf = true,
            "-o" | "--out" => {
                options.export.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "-h" | "--help" => return Ok(Invocation { command: Command::Help, options }),
            "-" => positional.push(a.clone()),
            s if s.starts_with('-') => return Err(format!("Unknown arg: {}", a).into()),
            _ if verb.is_none() => verb = Some(a.clone()),
            _ => positional.push(a.clone()),
        }
    }

    let mut pos = positional.into_iter();
    let command = match verb.as_deref() {
        None | Some("help") => Command::Help,
        Some("parse") => Command::Parse { input: parse_input(pos.next()), conf },
        Some("show") => Command::Show { key: pos.next().ok_or("show: missing <KEY>")?, conf },
        Some("save") => {
            let key = pos.next().ok_or("save: missing <KEY>")?;
            Command::Save { key, input: parse_input(pos.next()) }
        }
        Some("delete") => Command::Delete { key: pos.next().ok_or("delete: missing <KEY>")? },
        Some("list") => Command::List,
        Some("logo") => {
            let names: Vec<String> = pos.by_ref().collect();
            if names.is_empty() { return Err("logo: missing <NAME>".into()); }
            Command::Logo { names }
        }
        Some("check-aliases") => Command::CheckAliases,
        Some(other) => return Err(format!("Unknown command: {}", other).into()),
    };

    if let Some(extra) = pos.next() {
        return Err(format!("Unexpected argument: {}", extra).into());
    }

    Ok(Invocation { command, options })
}

fn read_input(input: &Input) -> Result<String, Box<dyn Error>> {
    match input {
        Input::Stdin => {
            let mut buf = s!();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Input::File(p) => fs::read_to_string(p)
            .map_err(|e| format!("Reading {}: {}", p.display(), e).into()),
    }
}

fn emit<W: Write>(
    out: &mut W,
    entries: &[RankEntry],
    include_conference: bool,
    options: &AppOptions,
) -> Result<(), Box<dyn Error>> {
    match &options.export.out {
        Some(path) => {
            let written = export::write_export(entries, include_conference, &options.export, path)?;
            writeln!(out, "Wrote {} entries to {}", entries.len(), written.display())?;
        }
        None => out.write_all(export::render(entries, include_conference, &options.export)?.as_bytes())?,
    }
    Ok(())
}

pub fn run(inv: Invocation) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let mut store = FileStore::new(inv.options.store_dir.clone());
    run_with(inv, &mut store, &mut lock)
}

/// Execute against an explicit store and output sink.
pub fn run_with<W: Write>(
    inv: Invocation,
    store: &mut dyn SettingsStore,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let Invocation { command, options } = inv;
    let resolver = LogoResolver::with_base_url(&options.logo_base);
    logd!("CLI: {:?}", command);

    match command {
        Command::Help => write!(out, "{}", HELP)?,

        Command::Parse { input, conf } => {
            let raw = read_input(&input)?;
            let entries = rankings::parse_with(&raw, conf, &resolver);
            emit(out, &entries, conf, &options)?;
        }

        Command::Show { key, conf } => {
            let mut board = Board::for_key(&key);
            board.include_conference |= conf;
            let raw = store
                .load(&key)?
                .ok_or_else(|| format!("Nothing saved under {:?}", key))?;
            if options.export.format == ExportFormat::Table && options.export.out.is_none() {
                out.write_all(board.preview(&raw, &resolver).as_bytes())?;
            } else {
                let entries = board.entries(&raw, &resolver);
                emit(out, &entries, board.include_conference, &options)?;
            }
        }

        Command::Save { key, input } => {
            let raw = read_input(&input)?;
            let board = Board::for_key(&key);
            let entries = board.save(store, &raw, &resolver)?;
            let missing: Vec<&str> = entries
                .iter()
                .filter(|e| e.logo.is_none())
                .map(|e| e.name.as_str())
                .collect();
            writeln!(out, "Saved {} ({} entries)", key, entries.len())?;
            if !missing.is_empty() {
                writeln!(out, "No logo for: {}", missing.join(", "))?;
            }
        }

        Command::Delete { key } => {
            if store.delete(&key)? {
                writeln!(out, "Deleted {}", key)?;
            } else {
                writeln!(out, "Nothing saved under {}", key)?;
            }
        }

        Command::List => {
            for key in store.keys()? {
                writeln!(out, "{}", key)?;
            }
        }

        Command::Logo { names } => {
            for name in names {
                let url = resolver.resolve(&name).unwrap_or_else(|| s!("-"));
                writeln!(out, "{}\t{}", name, url)?;
            }
        }

        Command::CheckAliases => {
            let overlaps = resolver.overlapping_aliases();
            for (short, long) in &overlaps {
                writeln!(out, "{:?} is inside {:?}", short, long)?;
            }
            writeln!(out, "{} overlapping alias pairs (longer key wins)", overlaps.len())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> { v.iter().map(|s| s.to_string()).collect() }

    #[test]
    fn parse_defaults_to_stdin() {
        let inv = parse_args(args(&["parse"]), AppOptions::default()).unwrap();
        assert_eq!(inv.command, Command::Parse { input: Input::Stdin, conf: false });
    }

    #[test]
    fn flags_anywhere() {
        let inv = parse_args(
            args(&["--format", "csv", "show", "rankings_sec", "--conf", "--headers"]),
            AppOptions::default(),
        )
        .unwrap();
        assert_eq!(inv.command, Command::Show { key: s!("rankings_sec"), conf: true });
        assert_eq!(inv.options.export.format, ExportFormat::Csv);
        assert!(inv.options.export.include_headers);
    }

    #[test]
    fn errors_are_messages() {
        assert!(parse_args(args(&["show"]), AppOptions::default()).is_err());
        assert!(parse_args(args(&["--format", "xml", "parse"]), AppOptions::default()).is_err());
        assert!(parse_args(args(&["frobnicate"]), AppOptions::default()).is_err());
        assert!(parse_args(args(&["list", "extra"]), AppOptions::default()).is_err());
        assert!(parse_args(args(&["--bogus"]), AppOptions::default()).is_err());
    }

    #[test]
    fn no_args_is_help() {
        let inv = parse_args(Vec::<String>::new(), AppOptions::default()).unwrap();
        assert_eq!(inv.command, Command::Help);
    }
}
