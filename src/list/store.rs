//! CSV-backed persistence for the shopping and recommended lists
//!
//! Two flat files live under the data directory: `shopping_list.csv`
//! (`item,quantity,category`) and `recommended_list.csv` (`item,category`).
//! Files are read whole and overwritten whole; there is no locking, so
//! concurrent writers race and the last write wins.

use super::models::{ListEntry, RecommendedItem};
use crate::error::StoreError;
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use std::path::{Path, PathBuf};
use tokio::fs;

/// File name of the shopping list CSV.
pub const SHOPPING_LIST_FILE: &str = "shopping_list.csv";
/// File name of the recommended list CSV.
pub const RECOMMENDED_LIST_FILE: &str = "recommended_list.csv";

const LIST_HEADER_LINE: &str = "item,quantity,category\n";
const RECOMMENDED_HEADER_LINE: &str = "item,category\n";

/// CSV store rooted at a data directory.
pub struct ListStore {
    data_dir: PathBuf,
}

impl ListStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn list_path(&self) -> PathBuf {
        self.data_dir.join(SHOPPING_LIST_FILE)
    }

    fn recommended_path(&self) -> PathBuf {
        self.data_dir.join(RECOMMENDED_LIST_FILE)
    }

    /// Creates the data directory and seeds both CSV files with a
    /// header-only row when they do not exist yet.
    pub async fn ensure_data_files(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).await?;
        for (path, header) in [
            (self.list_path(), LIST_HEADER_LINE),
            (self.recommended_path(), RECOMMENDED_HEADER_LINE),
        ] {
            if !path.exists() {
                fs::write(&path, header).await?;
            }
        }
        Ok(())
    }

    /// Loads the shopping list. Rows with an empty item are dropped.
    pub async fn load_list(&self) -> Result<Vec<ListEntry>, StoreError> {
        self.ensure_data_files().await?;
        let content = fs::read_to_string(self.list_path()).await?;
        parse_records(&content)
    }

    /// Overwrites the shopping list file with the given entries.
    pub async fn save_list(&self, entries: &[ListEntry]) -> Result<(), StoreError> {
        self.ensure_data_files().await?;
        let rows = entries
            .iter()
            .map(|e| vec![e.item.as_str(), e.quantity.as_str(), e.category.as_str()]);
        let content = encode(LIST_HEADER_LINE, rows)?;
        fs::write(self.list_path(), content).await?;
        Ok(())
    }

    /// Loads the recommended list as stored, without dedupe or sorting.
    pub async fn load_recommended(&self) -> Result<Vec<RecommendedItem>, StoreError> {
        self.ensure_data_files().await?;
        let content = fs::read_to_string(self.recommended_path()).await?;
        let rows = parse_records(&content)?;
        Ok(rows
            .into_iter()
            .map(|r| RecommendedItem {
                item: r.item,
                category: r.category,
            })
            .collect())
    }

    /// Overwrites the recommended list file with the given items.
    pub async fn save_recommended(&self, items: &[RecommendedItem]) -> Result<(), StoreError> {
        self.ensure_data_files().await?;
        let rows = items
            .iter()
            .map(|r| vec![r.item.as_str(), r.category.as_str()]);
        let content = encode(RECOMMENDED_HEADER_LINE, rows)?;
        fs::write(self.recommended_path(), content).await?;
        Ok(())
    }

    /// Truncates the shopping list file back to its header row.
    pub async fn clear_list(&self) -> Result<(), StoreError> {
        self.ensure_data_files().await?;
        fs::write(self.list_path(), LIST_HEADER_LINE).await?;
        Ok(())
    }
}

/// Parses CSV content into entries. The header row drives the column
/// mapping: `quantity` and `category` columns are optional, so the legacy
/// two-column shapes (`item,category`, `item,quantity`) load as well.
/// Fields are trimmed; rows whose item is empty are silently dropped.
fn parse_records(content: &str) -> Result<Vec<ListEntry>, StoreError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let has_quantity = headers
        .iter()
        .any(|h| h.trim().eq_ignore_ascii_case("quantity"));
    let has_category = headers
        .iter()
        .any(|h| h.trim().eq_ignore_ascii_case("category"));

    let mut entries = Vec::new();
    for result in reader.records() {
        let record = result?;
        let field = |i: usize| record.get(i).unwrap_or("").trim().to_string();

        let item = field(0);
        if item.is_empty() {
            continue;
        }
        let quantity = if has_quantity { field(1) } else { String::new() };
        let category = match (has_quantity, has_category) {
            (true, true) => field(2),
            (false, true) => field(1),
            _ => String::new(),
        };
        entries.push(ListEntry {
            item,
            quantity,
            category,
        });
    }
    Ok(entries)
}

/// Encodes rows below the given header line, quoting every field.
fn encode<'a>(
    header_line: &str,
    rows: impl Iterator<Item = Vec<&'a str>>,
) -> Result<Vec<u8>, StoreError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());
    for row in rows {
        writer.write_record(&row)?;
    }
    let body = writer.into_inner().map_err(|e| {
        StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            e.to_string(),
        ))
    })?;

    let mut content = Vec::from(header_line.as_bytes());
    content.extend(body);
    Ok(content)
}
