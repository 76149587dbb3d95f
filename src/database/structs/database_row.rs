use serde::Serialize;
use serde_json::{Map, Value};

/// One result row, decoded into column-name/value pairs in result order.
///
/// Values are decoded on a best-effort basis into JSON scalars; columns the
/// decoder cannot map become `Value::Null`.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct DatabaseRow {
    pub(crate) columns: Map<String, Value>,
}
