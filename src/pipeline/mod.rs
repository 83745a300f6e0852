//! Pipeline stages of one polling cycle.
//!
//! - `check_response`: Validate the shape of a decoded API response
//! - `parse_status`: Format the status message for a homework record
//! - `PollLoop`: Fetch → validate → format → notify, then sleep

pub mod format;
pub mod poll;
pub mod validate;

pub use format::{parse_homework, parse_status};
pub use poll::{FAILURE_PREFIX, NO_NEW_HOMEWORK, PollLoop};
pub use validate::{check_response, current_date};
