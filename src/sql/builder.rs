//! Builds the parameterized statements for the `characters` table.
//! Placeholders use SQLite's numbered form (`?1`), bound in column order.

pub const TABLE: &str = "characters";

/// Writable columns in bind order. `id` is assigned by SQLite.
pub const COLUMNS: &[&str] = &[
    "name",
    "gender",
    "favorite_fruit",
    "favorite_color",
    "profession",
    "personality",
    "pet",
    "image",
];

/// Quote identifier for SQLite (safe: only from constants above).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn select_column_list() -> String {
    std::iter::once("id")
        .chain(COLUMNS.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Table and name index. `favorite_color` and `pet` hold JSON text.
pub fn create_table() -> Vec<String> {
    let col_defs: Vec<String> = COLUMNS
        .iter()
        .map(|c| format!("{} TEXT NOT NULL", quoted(c)))
        .collect();
    vec![
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n  {} INTEGER PRIMARY KEY AUTOINCREMENT,\n  {}\n)",
            quoted(TABLE),
            quoted("id"),
            col_defs.join(",\n  ")
        ),
        format!(
            "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
            quoted(&format!("ix_{}_name", TABLE)),
            quoted(TABLE),
            quoted("name")
        ),
    ]
}

/// SELECT all rows ORDER BY id.
pub fn select_list() -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(),
        quoted(TABLE),
        quoted("id")
    )
}

/// SELECT by id. Sole param is the id.
pub fn select_by_id() -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?1",
        select_column_list(),
        quoted(TABLE),
        quoted("id")
    )
}

/// INSERT all writable columns, RETURNING the stored row.
pub fn insert() -> String {
    let cols: Vec<String> = COLUMNS.iter().map(|c| quoted(c)).collect();
    let placeholders: Vec<String> = (1..=COLUMNS.len()).map(|n| format!("?{}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(TABLE),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list()
    )
}

/// UPDATE every writable column by id. Params: the columns in order, then id.
pub fn update() -> String {
    let sets: Vec<String> = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ?{}", quoted(c), i + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ?{} RETURNING {}",
        quoted(TABLE),
        sets.join(", "),
        quoted("id"),
        COLUMNS.len() + 1,
        select_column_list()
    )
}

/// UPDATE by id where a NULL param keeps the current value. Same params as [`update`].
pub fn merge_update() -> String {
    let sets: Vec<String> = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let q = quoted(c);
            format!("{} = COALESCE(?{}, {})", q, i + 1, q)
        })
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ?{} RETURNING {}",
        quoted(TABLE),
        sets.join(", "),
        quoted("id"),
        COLUMNS.len() + 1,
        select_column_list()
    )
}

/// DELETE by id. Sole param is the id.
pub fn delete() -> String {
    format!("DELETE FROM {} WHERE {} = ?1", quoted(TABLE), quoted("id"))
}
