pub mod field;
pub mod naming;
pub mod process;
pub mod reader;
pub mod record;
mod result;
pub mod validation;
pub mod writer;

pub use field::{Field, FieldError, Violation};
pub use process::{partition, process_file, PartitionCounts, ProcessError, ProcessingSummary};
pub use record::{
    Currency, RawRecord, RejectedRecord, Status, TransactionRecord, ValidationOutcome,
};
pub use result::Result;
