//! Recurrence evaluation, occurrence generation, and rule description.

mod describe;
mod evaluate;
mod generate;

pub use describe::describe;
pub use evaluate::{occurs_on, occurs_on_datetime};
pub use generate::{next_occurrence, occurrences_in_range};
