//! Sets up the log file. Nothing is logged unless a logger is installed with [`init`](fn.init.html).
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use chrono::Local;
use log::SetLoggerError;
use simplelog::{WriteLogger, LevelFilter, Config};

/// Converts a level name to a filter, or `None` if the name is not recognized
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Installs the global logger, writing to `file` or discarding everything if there is none
pub fn init(level: LevelFilter, file: Option<File>) -> Result<(), SetLoggerError> {
    match file {
        Some(file) => WriteLogger::init(level, Config::default(), file),
        None => WriteLogger::init(LevelFilter::Off, Config::default(), io::sink()),
    }
}

/// Creates `dir` if needed and a new file in it named after the current local time. Older log
/// files are deleted first, oldest first, so that no more than `max_files` remain afterwards.
pub fn create_log_file(dir: &Path, max_files: usize) -> io::Result<(PathBuf, File)> {
    fs::create_dir_all(dir)?;
    prune(dir, max_files.max(1) - 1)?;

    let name = Local::now().format("log_%Y-%m-%d_%H-%M-%S.txt").to_string();
    let path = dir.join(name);
    let file = File::create(&path)?;
    Ok((path, file))
}

/// Deletes the oldest log files in `dir` until at most `keep` are left
fn prune(dir: &Path, keep: usize) -> io::Result<()> {
    let mut logs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let is_log = name.to_str()
            .map_or(false, |name| name.starts_with("log_") && name.ends_with(".txt"));
        if is_log && entry.file_type()?.is_file() {
            logs.push(entry.path());
        }
    }

    // timestamps sort by name
    logs.sort();
    let excess = logs.len().saturating_sub(keep);
    for path in &logs[..excess] {
        fs::remove_file(path)?;
    }

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("magpie-logging-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir).unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn level_names() {
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("warn"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("trace"), Some(LevelFilter::Trace));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = scratch_dir("create").join("nested");
        let (path, _) = create_log_file(&dir, 5).unwrap();

        assert!(path.exists());
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("log_") && name.ends_with(".txt"));
        assert_eq!(name.len(), "log_2024-05-26_12-00-00.txt".len());
        fs::remove_dir_all(dir.parent().unwrap()).unwrap();
    }

    #[test]
    fn oldest_logs_are_pruned() {
        let dir = scratch_dir("prune");
        fs::create_dir_all(&dir).unwrap();
        for day in 1..=4 {
            File::create(dir.join(format!("log_2000-01-0{}_00-00-00.txt", day))).unwrap();
        }
        File::create(dir.join("notes.txt")).unwrap();

        create_log_file(&dir, 3).unwrap();
        let names = file_names(&dir);
        assert_eq!(names.len(), 4);
        assert_eq!(names[0], "log_2000-01-03_00-00-00.txt");
        assert_eq!(names[1], "log_2000-01-04_00-00-00.txt");
        assert!(names.contains(&"notes.txt".to_string()));
        fs::remove_dir_all(&dir).unwrap();
    }
}
