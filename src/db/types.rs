use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            Value::Float(value) => Some(*value as i64),
            Value::Text(value) => value.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Zero-based position of a column, matched case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|col| col.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_columns_case_insensitively() {
        let set = ResultSet {
            columns: vec![
                Column {
                    name: "ID".to_string(),
                },
                Column {
                    name: "FIRST_NAME".to_string(),
                },
            ],
            rows: Vec::new(),
        };
        assert_eq!(set.column_index("first_name"), Some(1));
        assert_eq!(set.column_index("missing"), None);
    }

    #[test]
    fn coerces_values_to_ints() {
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Text(" 42 ".to_string()).as_int(), Some(42));
        assert_eq!(Value::Null.as_int(), None);
    }
}
