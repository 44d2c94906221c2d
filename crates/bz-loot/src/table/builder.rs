//! Building `MonsterLootTable`s from normalized source rows.

use std::collections::BTreeMap;

use super::{HEADER_ROW, MonsterLootTable, NO_GUARANTEED_REWARD, RowRecord};

/// Build one loot table per source row, in source order.
///
/// Numeric cells default to 0 when absent or non-numeric; an empty
/// guaranteed cell becomes the `NO_GUARANTEED_REWARD` sentinel; empty
/// reward cells are omitted from the sum map. Building stops at the first
/// row without a monster name. Rows that merely lack optional cells are
/// valid.
pub fn build_tables(rows: &[RowRecord]) -> Vec<MonsterLootTable> {
    let mut tables = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        if row.name.trim().is_empty() {
            break;
        }
        let source_row = HEADER_ROW + index as u32;

        let mut rewards_by_sum = BTreeMap::new();
        for (offset, cell) in row.rewards.iter().enumerate() {
            if let Some(text) = cell
                && !text.trim().is_empty()
            {
                // Sequential insertion: a repeated sum keeps the last value.
                rewards_by_sum.insert(offset as u32 + 1, text.clone());
            }
        }

        tables.push(MonsterLootTable {
            id: format!("{}-{source_row}", row.name),
            name: row.name.clone(),
            w6_count: parse_count(row.w6.as_deref()),
            w20_count: parse_count(row.w20.as_deref()),
            guaranteed: row
                .guaranteed
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(NO_GUARANTEED_REWARD)
                .to_string(),
            rewards_by_sum,
        });
    }

    tables
}

/// Parse a dice-count cell; absent or non-numeric cells count as 0.
fn parse_count(cell: Option<&str>) -> u32 {
    cell.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}
