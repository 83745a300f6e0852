// src/pipeline/format.rs

//! Turns a raw homework record into a notification.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{Homework, HomeworkStatus};

/// Fields of a raw API homework record this crate reads.
#[derive(Debug, Deserialize)]
struct HomeworkRecord<'a> {
    #[serde(default, borrow)]
    homework_name: Option<&'a str>,

    #[serde(default, borrow)]
    status: Option<&'a str>,
}

/// Check a raw record and resolve its status through the catalog.
pub fn parse_homework(record: &Value) -> Result<Homework> {
    let record = HomeworkRecord::deserialize(record)
        .map_err(|e| AppError::field(format!("Некорректная запись о работе: {e}.")))?;

    let name = record
        .homework_name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::field("Отсутствует имя работы."))?;

    let code = record
        .status
        .filter(|code| !code.is_empty())
        .ok_or_else(|| AppError::field(format!("Отсутствует статус работы \"{name}\".")))?;

    let status: HomeworkStatus = code
        .parse()
        .map_err(|_| AppError::unknown_status(name, code))?;

    Ok(Homework {
        name: name.to_string(),
        status,
    })
}

/// Build the status-change message for one homework record.
pub fn parse_status(record: &Value) -> Result<String> {
    parse_homework(record).map(|homework| homework.status_message())
}
