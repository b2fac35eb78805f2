use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use crate::model::work_item::{Status, WorkItem, UNKNOWN_ISSUER};
use crate::util::dates::parse_lenient;

/// The input could not be read as a work item table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
}

/// Column positions after header normalization. Only the key column is mandatory.
#[derive(Debug)]
struct Columns {
    key: usize,
    summary: Option<usize>,
    issuer: Option<usize>,
    item_type: Option<usize>,
    effort: Option<usize>,
    status: Option<usize>,
    due: Option<usize>,
    completed: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();

        Ok(Self {
            key: position(&names, &["chave"]).ok_or(LoadError::MissingColumn("Chave"))?,
            summary: position(&names, &["resumo"]),
            issuer: position(&names, &["emissor"]),
            item_type: position(&names, &["tipo_de_item", "tipo_item"]),
            effort: position(&names, &["conta_de_esforço", "conta_de_esforco", "conta_esforco"]),
            status: position(&names, &["status"]),
            due: position(&names, &["data_limite"]),
            completed: position(&names, &["data_real"]),
        })
    }
}

fn position(names: &[String], wanted: &[&str]) -> Option<usize> {
    names.iter().position(|n| wanted.contains(&n.as_str()))
}

/// Lowercase, trimmed, spaces replaced by underscores. A leading BOM is dropped.
pub fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .trim()
        .replace(' ', "_")
        .to_lowercase()
}

fn cell(record: &StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|i| record.get(i)).unwrap_or("").trim()
}

fn date_cell(
    record: &StringRecord,
    idx: Option<usize>,
    key: &str,
    column: &str,
) -> Option<NaiveDate> {
    let raw = cell(record, idx);
    let parsed = parse_lenient(raw);
    if parsed.is_none() && !raw.is_empty() {
        log::debug!("{key}: ignoring unparseable {column} {raw:?}");
    }
    parsed
}

pub fn load_from_path(path: &Path) -> Result<Vec<WorkItem>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_reader(file)
}

/// Read work items from CSV, dropping rows without a key. Short rows are
/// accepted; their missing trailing cells read as empty.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<WorkItem>, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    let cols = Columns::from_headers(rdr.headers()?)?;

    let mut items = Vec::new();
    let mut dropped = 0usize;

    for record in rdr.records() {
        let record = record?;
        let key = cell(&record, Some(cols.key));
        if key.is_empty() {
            dropped += 1;
            continue;
        }

        let issuer = match cell(&record, cols.issuer) {
            "" => UNKNOWN_ISSUER.to_string(),
            other => other.to_string(),
        };

        items.push(WorkItem {
            key: key.to_string(),
            summary: cell(&record, cols.summary).to_string(),
            issuer,
            item_type: cell(&record, cols.item_type).to_string(),
            effort: cell(&record, cols.effort).to_string(),
            status: Status::parse(cell(&record, cols.status)),
            due: date_cell(&record, cols.due, key, "Data limite"),
            completed: date_cell(&record, cols.completed, key, "Data real"),
        });
    }

    if dropped > 0 {
        log::debug!("dropped {dropped} row(s) without a key");
    }
    log::info!("loaded {} work item(s)", items.len());

    Ok(items)
}
