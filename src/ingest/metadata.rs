use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BlockKind, MarmosetError, MarmosetResult};

use super::ExportLayout;
use super::decode::{block_lines, decode_block};

/// Ordered experiment parameters from the metadata block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataBlock {
    entries: IndexMap<String, String>,
}

impl MetadataBlock {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &IndexMap<String, String> {
        &self.entries
    }

    /// Renders a two-column `Key | Field` markdown table.
    #[must_use]
    pub fn to_markdown_table(&self) -> String {
        let mut out = String::from("|Key|Field|\n|:---|:---|");
        for (key, value) in &self.entries {
            out.push_str(&format!("\n|{key}|{value}|"));
        }
        out
    }
}

/// Decodes and parses the metadata block into ordered key/field pairs.
///
/// Each line is `key,field...`. Fields are concatenated, except on the
/// layout's list row where they are joined with `", "`. The sentinel row is
/// dropped. Repeated keys keep their first position and take the last value.
pub fn format_metadata(bytes: &[u8], layout: &ExportLayout) -> MarmosetResult<MetadataBlock> {
    let encoding = layout.resolve_encoding()?;
    let text = decode_block(bytes, encoding, BlockKind::Metadata)?;

    let mut lines: Vec<&str> = block_lines(&text).collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let mut entries = IndexMap::with_capacity(lines.len());
    for (index, line) in lines.into_iter().enumerate() {
        let mut tokens = line.split(',');
        let key = tokens.next().unwrap_or_default();
        if key == layout.sentinel_key {
            continue;
        }

        let fields: Vec<&str> = tokens.collect();
        if key.is_empty() || fields.is_empty() {
            return Err(MarmosetError::MalformedRow {
                line: index,
                content: line.to_owned(),
            });
        }

        let value = if index == layout.list_field_row {
            fields.join(", ")
        } else {
            fields.concat()
        };
        entries.insert(key.to_owned(), value);
    }

    debug!(entry_count = entries.len(), "formatted metadata block");
    Ok(MetadataBlock { entries })
}
