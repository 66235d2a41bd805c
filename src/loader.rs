//! Evaluation file discovery and CSV loading.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One respondent's answers, keyed by the column header they appeared under.
///
/// Columns keep header order so downstream extraction sees the same order as
/// the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    fields: Vec<(String, String)>,
}

impl Response {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[cfg(test)]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == column).map(|(_, v)| v)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Response {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Lists the `.csv` files directly under `dir` whose name contains `token`,
/// sorted by path.
pub fn discover_eval_files(dir: &Path, token: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*{}*.csv",
        glob::Pattern::escape(&dir.to_string_lossy()),
        glob::Pattern::escape(token)
    );

    let mut files = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("invalid pattern {pattern}"))? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    debug!(dir = %dir.display(), token, count = files.len(), "Discovered evaluation files");
    Ok(files)
}

/// Reads every respondent row from an evaluation CSV.
///
/// The first header may carry a UTF-8 byte-order mark, which is stripped.
/// Rows shorter than the header simply lack the trailing columns.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_eval_file(path: &Path) -> Result<Vec<Response>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_responses(file).with_context(|| format!("reading {}", path.display()))
}

/// Parses evaluation rows from any CSV source.
///
/// A repeated header yields one column, at the position where the name first
/// appears, holding the value under its last occurrence.
pub fn read_responses<R: std::io::Read>(reader: R) -> Result<Vec<Response>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut names: Vec<String> = Vec::new();
    let slots: Vec<usize> = rdr
        .headers()?
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let name = if idx == 0 {
                name.trim_start_matches('\u{feff}')
            } else {
                name
            };
            match names.iter().position(|n| n == name) {
                Some(slot) => slot,
                None => {
                    names.push(name.to_string());
                    names.len() - 1
                }
            }
        })
        .collect();

    if names.len() < slots.len() {
        debug!(
            columns = slots.len(),
            distinct = names.len(),
            "Repeated headers collapsed"
        );
    }

    let mut responses: Vec<Response> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let mut values: Vec<Option<&str>> = vec![None; names.len()];
        for (idx, &slot) in slots.iter().enumerate() {
            values[slot] = record.get(idx);
        }
        responses.push(
            names
                .iter()
                .zip(values)
                .filter_map(|(name, value)| value.map(|v| (name.clone(), v.to_string())))
                .collect(),
        );
    }

    debug!(rows = responses.len(), columns = names.len(), "Loaded responses");
    Ok(responses)
}
