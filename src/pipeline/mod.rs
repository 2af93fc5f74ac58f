//! Processing pipeline components.

mod coordinator;
mod processor;

pub use coordinator::{FetchCheck, destination_for, should_fetch};
pub use processor::{interrupted_record, process_row};
