//! Tabular-source adapters.
//!
//! Two equivalent source shapes feed the table builder: a cell-addressed
//! grid ("A2", "B2", ... as exported from a spreadsheet) and a record list
//! keyed by column headers ("Monster", "W6", "W20", "Garantierte
//! Belohnung", "1".."20"). Both normalize to the same `RowRecord` sequence,
//! terminated by the first row without a monster name.

use std::collections::HashMap;

use serde_json::Value;

use super::{FIXED_COLUMNS, HEADER_ROW, REWARD_COLUMN_COUNT};
use crate::error::{LootError, LootResult};

/// One normalized source row. Cells are raw text; the builder applies
/// defaults and numeric parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRecord {
    /// Monster name (column A / "Monster").
    pub name: String,
    /// W6 dice count cell, unparsed.
    pub w6: Option<String>,
    /// W20 dice count cell, unparsed.
    pub w20: Option<String>,
    /// Guaranteed reward cell.
    pub guaranteed: Option<String>,
    /// The reward block, one cell per dice sum 1..=20, in order.
    pub rewards: Vec<Option<String>>,
}

/// Read rows from a cell-addressed grid.
///
/// Data starts at `HEADER_ROW` and ends at the first row whose name cell
/// (column A) is absent or blank.
pub fn rows_from_grid(cells: &HashMap<String, String>) -> Vec<RowRecord> {
    let mut rows = Vec::new();
    let mut row = HEADER_ROW;

    loop {
        let name = match cells.get(&format!("A{row}")) {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => break,
        };

        let cell = |column: &str| cells.get(&format!("{column}{row}")).cloned();
        let rewards = (1..=REWARD_COLUMN_COUNT)
            .map(|i| cell(&column_letter(FIXED_COLUMNS + i)))
            .collect();

        rows.push(RowRecord {
            name,
            w6: cell("B"),
            w20: cell("C"),
            guaranteed: cell("D"),
            rewards,
        });
        row += 1;
    }

    rows
}

/// Read rows from a grid serialized as a JSON object of cell → value.
pub fn rows_from_grid_json(json: &str) -> LootResult<Vec<RowRecord>> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| LootError::SourceFormat(e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(LootError::SourceFormat(
            "grid source must be a JSON object of cells".to_string(),
        ));
    };

    let cells: HashMap<String, String> = map
        .into_iter()
        .filter_map(|(address, cell)| scalar_to_string(&cell).map(|s| (address, s)))
        .collect();
    Ok(rows_from_grid(&cells))
}

/// Read rows from a record-list JSON document.
///
/// Accepts either a top-level array of records or an object wrapping one
/// (the sheet-name export shape, e.g. `{"Tabelle1": [...]}`).
pub fn rows_from_records(json: &str) -> LootResult<Vec<RowRecord>> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| LootError::SourceFormat(e.to_string()))?;

    let records = match &value {
        Value::Array(records) => records,
        Value::Object(map) => map
            .values()
            .find_map(Value::as_array)
            .ok_or_else(|| LootError::SourceFormat("no record array found".to_string()))?,
        _ => {
            return Err(LootError::SourceFormat(
                "record source must be an array or an object wrapping one".to_string(),
            ));
        }
    };

    let mut rows = Vec::new();
    for record in records {
        let Some(fields) = record.as_object() else {
            break;
        };
        let name = match fields.get("Monster").and_then(scalar_to_string) {
            Some(name) if !name.trim().is_empty() => name,
            _ => break,
        };

        let rewards = (1..=REWARD_COLUMN_COUNT)
            .map(|i| fields.get(&i.to_string()).and_then(scalar_to_string))
            .collect();

        rows.push(RowRecord {
            name,
            w6: fields.get("W6").and_then(scalar_to_string),
            w20: fields.get("W20").and_then(scalar_to_string),
            guaranteed: fields
                .get("Garantierte Belohnung")
                .and_then(scalar_to_string),
            rewards,
        });
    }

    Ok(rows)
}

/// Spreadsheet column letters for a 1-based column index (1 → A, 27 → AA).
pub fn column_letter(mut index: u32) -> String {
    let mut letters = Vec::new();
    while index > 0 {
        index -= 1;
        letters.push(b'A' + (index % 26) as u8);
        index /= 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
