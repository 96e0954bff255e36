//! In-memory sample ledger for one questionnaire session.
//!
//! The [`Ledger`] is append-only and ordered by submission. [`Session`] wraps
//! it with intake checks and the optional webhook relay; export goes through
//! [`export_csv`].

pub mod error;
pub mod export;
pub mod ledger;
pub mod session;

pub use error::LedgerError;
pub use export::{export_csv, CsvExport, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
pub use ledger::Ledger;
pub use session::{relay_accepted, Accepted, Session, Submission};
