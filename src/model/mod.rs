use anyhow::Result;
use serde::Serialize;

use crate::db::types::{ResultSet, Value};
use crate::error::{AppError, ErrorKind};

/// A persisted entity: its physical table name plus the mapping from a
/// result-set row back into the type.
pub trait Entity: Sized {
    const TABLE: &'static str;

    fn from_row(set: &ResultSet, row: &[Value]) -> Result<Self>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub city_id: Option<i64>,
}

impl Entity for Student {
    const TABLE: &'static str = "STUDENT";

    fn from_row(set: &ResultSet, row: &[Value]) -> Result<Self> {
        Ok(Self {
            id: require_int(set, row, "ID")?,
            first_name: require_text(set, row, "FIRST_NAME")?,
            last_name: require_text(set, row, "LAST_NAME")?,
            city_id: optional_int(set, row, "CITY_ID"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: i64,
    pub name: String,
    pub country_id: Option<i64>,
}

impl Entity for City {
    const TABLE: &'static str = "CITY";

    fn from_row(set: &ResultSet, row: &[Value]) -> Result<Self> {
        Ok(Self {
            id: require_int(set, row, "ID")?,
            name: require_text(set, row, "NAME")?,
            country_id: optional_int(set, row, "COUNTRY_ID"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: i64,
    pub name: String,
}

impl Entity for Country {
    const TABLE: &'static str = "COUNTRY";

    fn from_row(set: &ResultSet, row: &[Value]) -> Result<Self> {
        Ok(Self {
            id: require_int(set, row, "ID")?,
            name: require_text(set, row, "NAME")?,
        })
    }
}

fn cell<'a>(set: &ResultSet, row: &'a [Value], name: &str) -> Option<&'a Value> {
    set.column_index(name).and_then(|idx| row.get(idx))
}

fn require_int(set: &ResultSet, row: &[Value], name: &str) -> Result<i64> {
    cell(set, row, name)
        .and_then(Value::as_int)
        .ok_or_else(|| missing(name))
}

fn require_text(set: &ResultSet, row: &[Value], name: &str) -> Result<String> {
    cell(set, row, name)
        .and_then(|value| value.as_text().map(str::to_string))
        .ok_or_else(|| missing(name))
}

fn optional_int(set: &ResultSet, row: &[Value], name: &str) -> Option<i64> {
    cell(set, row, name).and_then(Value::as_int)
}

fn missing(name: &str) -> anyhow::Error {
    AppError::new(ErrorKind::Query, format!("Result row has no usable '{}' column", name)).into()
}
