//! Keys file reading and writing
//!
//! The keys file is line oriented:
//!
//! ```text
//! # comment
//! generic-quit  q Q
//! generic-help  UNDEFINED
//! ```
//!
//! Loading is permissive. Unknown actions, key names that resolve to no
//! typable key and conflicting keys are collected in a [`LoadReport`] instead
//! of failing.

use std::fmt;
use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use super::command::VirtualKey;
use super::keymap::{BindError, Conflict, FillError, Keymap, UNDEFINED};

/// Comment block written at the top of every keys file
const HEADER: &str = "#
# Keys configuration file
#
# In this file the keybindings of the interactive interface are defined.
# It is generated automatically and is maintained via the key
# configuration menu of the interactive user interface. It should not
# be edited directly.
";

fn write_header<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "{}", HEADER)
}

/// Write the built-in default bindings, one action per line
pub fn dump_defaults<W: Write>(w: &mut W) -> io::Result<()> {
    write_header(w)?;
    for vkey in VirtualKey::ALL {
        writeln!(w, "{}  {}", vkey.label(), vkey.default_binding())?;
    }
    Ok(())
}

/// Write the default keys file to `path`
pub fn dump_defaults_file(path: &Path) -> Result<(), KeymapError> {
    let mut file = fs::File::create(path)
        .map_err(|e| KeymapError::IoError(format!("{}: {}", path.display(), e)))?;
    dump_defaults(&mut file).map_err(|e| KeymapError::IoError(e.to_string()))?;
    tracing::info!("Wrote default keys to {}", path.display());
    Ok(())
}

/// What went wrong on one line of a keys file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadIssueKind {
    /// The first word is not the label of any action
    UnknownAction(String),
    /// An action line lists no keys at all
    NoKeys(VirtualKey),
    /// A key name that stands for no key that can be typed
    UnknownKey { action: VirtualKey, name: String },
    /// A key is already bound to another action
    Conflict { action: VirtualKey, conflict: Conflict },
}

/// A problem found while loading, with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadIssue {
    pub line: usize,
    pub kind: LoadIssueKind,
}

impl fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            LoadIssueKind::UnknownAction(label) => write!(f, "unknown action '{}'", label),
            LoadIssueKind::NoKeys(action) => write!(f, "no keys given for {}", action),
            LoadIssueKind::UnknownKey { action, name } => {
                write!(f, "unknown key '{}' for {}", name, action)
            }
            LoadIssueKind::Conflict { action, conflict } => {
                write!(f, "cannot bind to {}: {}", action, conflict)
            }
        }
    }
}

/// Summary of a load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Keys successfully bound
    pub assigned: usize,
    pub issues: Vec<LoadIssue>,
    /// Set when the loaded bindings took a key some missing action needs by
    /// default; the file was then discarded in favour of the defaults
    pub rejected: Option<FillError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.rejected.is_none()
    }
}

/// Errors that can occur when reading or writing keys files
#[derive(Debug, Clone)]
pub enum KeymapError {
    IoError(String),
    /// The built-in defaults contradict each other
    Defaults(FillError),
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::Defaults(e) => write!(f, "Corrupt default keys: {}", e),
        }
    }
}

impl std::error::Error for KeymapError {}

impl From<FillError> for KeymapError {
    fn from(e: FillError) -> Self {
        KeymapError::Defaults(e)
    }
}

fn log_issues(report: &LoadReport) {
    for issue in &report.issues {
        tracing::warn!("Keys file {}", issue);
    }
}

impl Keymap {
    /// Write the live bindings, one action per line
    ///
    /// Explicitly unbound actions are written as `UNDEFINED`; missing actions
    /// are left out so they stay missing when the file is read back.
    pub fn save<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write_header(w)?;
        for vkey in VirtualKey::ALL {
            if self.is_missing(vkey) {
                continue;
            }
            let keys = self.all_keys(vkey);
            writeln!(w, "{}  {}", vkey.label(), keys)?;
        }
        Ok(())
    }

    /// Write the live bindings to `path`
    pub fn save_file(&self, path: &Path) -> Result<(), KeymapError> {
        let mut buf = Vec::new();
        self.save(&mut buf)
            .map_err(|e| KeymapError::IoError(e.to_string()))?;
        fs::write(path, buf)
            .map_err(|e| KeymapError::IoError(format!("{}: {}", path.display(), e)))?;
        tracing::info!("Saved keys to {}", path.display());
        Ok(())
    }

    /// Whether any action was explicitly left without keys
    pub fn check_undefined(&self) -> bool {
        VirtualKey::ALL.iter().any(|&vkey| self.is_undefined(vkey))
    }

    /// Whether any action was never configured
    ///
    /// A loaded keymap with missing actions must go through `fill_missing`
    /// before use.
    pub fn check_missing(&self) -> bool {
        VirtualKey::ALL.iter().any(|&vkey| self.is_missing(vkey))
    }

    /// Whether `fill_missing` would succeed, leaving this keymap untouched
    pub fn check_fill(&self) -> Result<usize, FillError> {
        self.clone().fill_missing()
    }

    /// Load bindings from keys-file lines into this keymap
    pub fn load<R: BufRead>(&mut self, reader: R) -> io::Result<LoadReport> {
        let mut report = LoadReport::default();
        for (idx, line) in reader.lines().enumerate() {
            self.load_line(idx + 1, &line?, &mut report);
        }
        log_issues(&report);
        Ok(report)
    }

    /// Load bindings from a string holding a whole keys file
    pub fn load_str(&mut self, content: &str) -> LoadReport {
        let mut report = LoadReport::default();
        for (idx, line) in content.lines().enumerate() {
            self.load_line(idx + 1, line, &mut report);
        }
        log_issues(&report);
        report
    }

    fn load_line(&mut self, line_no: usize, line: &str, report: &mut LoadReport) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        let mut words = line.split_whitespace();
        let Some(label) = words.next() else {
            return;
        };
        let Ok(action) = label.parse::<VirtualKey>() else {
            report.issues.push(LoadIssue {
                line: line_no,
                kind: LoadIssueKind::UnknownAction(label.to_string()),
            });
            return;
        };

        let mut any = false;
        for name in words {
            any = true;
            if name == UNDEFINED {
                self.mark_undefined(action);
                continue;
            }
            let key = self.code_of(name);
            let kind = match self.assign(key, action) {
                Ok(()) => {
                    report.assigned += 1;
                    continue;
                }
                Err(BindError::Unnamed(_)) => LoadIssueKind::UnknownKey {
                    action,
                    name: name.to_string(),
                },
                Err(BindError::Conflict(conflict)) => LoadIssueKind::Conflict { action, conflict },
            };
            report.issues.push(LoadIssue {
                line: line_no,
                kind,
            });
        }

        if !any {
            report.issues.push(LoadIssue {
                line: line_no,
                kind: LoadIssueKind::NoKeys(action),
            });
        }
    }

    /// Load bindings from the keys file at `path`
    pub fn load_file(&mut self, path: &Path) -> Result<LoadReport, KeymapError> {
        let file = fs::File::open(path)
            .map_err(|e| KeymapError::IoError(format!("{}: {}", path.display(), e)))?;
        let report = self
            .load(BufReader::new(file))
            .map_err(|e| KeymapError::IoError(format!("{}: {}", path.display(), e)))?;
        tracing::info!(
            "Loaded keys from {} ({} keys, {} issues)",
            path.display(),
            report.assigned,
            report.issues.len()
        );
        Ok(report)
    }

    /// Build the keymap used at startup
    ///
    /// Writes the default keys file on first run (failure to create it is an
    /// error), then loads it. If the file cannot be read, or its bindings
    /// take keys that missing actions need by default, the defaults are used
    /// instead. Missing actions always receive their defaults. Only a conflict
    /// inside the built-in defaults is an error.
    pub fn load_or_create(path: &Path) -> Result<(Keymap, LoadReport), KeymapError> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    KeymapError::IoError(format!("{}: {}", parent.display(), e))
                })?;
            }
            dump_defaults_file(path)?;
        }

        let mut keymap = Keymap::new();
        let mut report = match keymap.load_file(path) {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!("Failed to load keys ({}), using defaults", e);
                return Ok((Keymap::with_defaults()?, LoadReport::default()));
            }
        };

        if let Err(e) = keymap.fill_missing() {
            tracing::warn!(
                "Keys in {} clash with the defaults ({}), using defaults",
                path.display(),
                e
            );
            report.rejected = Some(e);
            keymap = Keymap::with_defaults()?;
        }
        Ok((keymap, report))
    }
}
