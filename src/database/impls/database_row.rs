use serde_json::{Map, Value};
use crate::database::structs::database_row::DatabaseRow;

impl DatabaseRow {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl From<Map<String, Value>> for DatabaseRow {
    fn from(columns: Map<String, Value>) -> Self {
        DatabaseRow { columns }
    }
}
