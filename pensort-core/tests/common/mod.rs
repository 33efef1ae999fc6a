#![allow(dead_code)]

use anyhow::Result;
use pensort_core::{Plan, ReportLevel, UserInteraction};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Records every report and answers confirmations from a fixed script.
pub struct ScriptedInteraction {
    answers: Vec<bool>,
    pub reports: Vec<(ReportLevel, String)>,
    pub confirmations: usize,
}

impl ScriptedInteraction {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().rev().copied().collect(),
            reports: Vec::new(),
            confirmations: 0,
        }
    }

    pub fn messages(&self) -> Vec<&str> {
        self.reports.iter().map(|(_, m)| m.as_str()).collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.reports.iter().any(|(_, m)| m.contains(needle))
    }
}

impl UserInteraction for ScriptedInteraction {
    fn report(&mut self, level: ReportLevel, message: &str) {
        self.reports.push((level, message.to_string()));
    }

    fn confirm(&mut self, _plan: &Plan) -> Result<bool> {
        self.confirmations += 1;
        Ok(self.answers.pop().unwrap_or(false))
    }
}

/// Create files (with their content) relative to `root`, making parents.
pub fn create_files(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let path = root.join(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// Snapshot of every file and directory under `root`, with file contents.
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let relative = entry.path().strip_prefix(root).unwrap().to_path_buf();
            let content = if entry.file_type().is_file() {
                Some(fs::read(entry.path()).unwrap())
            } else {
                None
            };
            (relative, content)
        })
        .collect()
}
