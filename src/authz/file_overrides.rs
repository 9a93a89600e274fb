//! Secondary plain-text override files for per-account settings.
//!
//! Two well-known files under a host-provided directory are scanned
//! line-by-line for `Warden.Account.<id>.<Field> = value` entries: the
//! distributed defaults first, the local override second. The later file
//! wins per field. The structured config source still takes precedence
//! over anything read here.

use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::authz::constants::{ACCOUNT_KEY_PREFIX, OVERRIDE_DIST_FILE, OVERRIDE_FILE};
use crate::authz::id::AccountId;

/// Per-account values sourced from the override file pair.
///
/// Values are kept raw here; normalization and clamping happen when the
/// account registry consumes them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileOverride {
    pub preset: Option<String>,
    pub level: Option<u32>,
    pub commands: Option<String>,
}

/// Reads the override file pair under `dir`. Missing files are skipped
/// silently; unreadable files are skipped with a warning.
pub fn read_file_overrides(dir: &Path) -> HashMap<AccountId, FileOverride> {
    let mut overrides = HashMap::new();

    for name in [OVERRIDE_DIST_FILE, OVERRIDE_FILE] {
        let path = dir.join(name);
        let file = match std::fs::File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
            Err(err) => {
                tracing::warn!(
                    target: "warden::config",
                    path = %path.display(),
                    error = %err,
                    "skipping unreadable override file"
                );
                continue;
            }
        };

        for line in BufReader::new(file).lines() {
            match line {
                Ok(line) => apply_line(&line, &mut overrides),
                Err(err) => {
                    tracing::warn!(
                        target: "warden::config",
                        path = %path.display(),
                        error = %err,
                        "stopping override file read"
                    );
                    break;
                }
            }
        }
    }

    overrides
}

fn apply_line(line: &str, overrides: &mut HashMap<AccountId, FileOverride>) {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
        return;
    }

    let (key, value) = match line.split_once('=') {
        Some(parts) => parts,
        None => return,
    };

    let suffix = match key.trim().strip_prefix(ACCOUNT_KEY_PREFIX) {
        Some(suffix) => suffix,
        None => return,
    };

    let value: String = value.trim().chars().filter(|&ch| ch != '"').collect();

    let (account, field) = match suffix.split_once('.') {
        Some(parts) => parts,
        None => return,
    };

    let account = match account.parse::<u32>() {
        Ok(raw) => AccountId::new(raw),
        Err(_) => return,
    };

    let entry = overrides.entry(account).or_default();
    match field {
        "Preset" => {
            if !value.is_empty() {
                entry.preset = Some(value);
            }
        }
        "Level" => {
            if let Ok(level) = value.parse::<u32>() {
                entry.level = Some(level);
            }
        }
        "Commands" => {
            if !value.is_empty() {
                entry.commands = Some(value);
            }
        }
        _ => {}
    }
}
