/// All primary keys are SQLite `INTEGER PRIMARY KEY` row ids.
pub type DbId = i64;
