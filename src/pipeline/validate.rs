// src/pipeline/validate.rs

//! Shape checks for decoded review-API responses.

use serde_json::Value;

use crate::error::{AppError, Result};

/// Check that a decoded response carries a homework list and a date.
///
/// Returns the `homeworks` sequence. The checks run in a fixed order and
/// the first one that fails decides the error.
pub fn check_response(response: &Value) -> Result<&[Value]> {
    let Some(map) = response.as_object() else {
        return Err(AppError::shape("Ответ API вернул не словарь."));
    };

    let Some(homeworks) = map.get("homeworks") else {
        return Err(AppError::shape("В ответе отсутствует ключ \"homeworks\"."));
    };

    if !map.contains_key("current_date") {
        return Err(AppError::shape(
            "В ответе отсутствует ключ \"current_date\".",
        ));
    }

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| AppError::shape("Ключ \"homeworks\" вернул не список."))
}

/// Server timestamp of a response, if it is an integer.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}
