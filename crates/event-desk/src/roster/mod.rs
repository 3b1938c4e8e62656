//! Candidate roster for one event: fetch, filter, render, and print.
//!
//! The list is fetched verbatim from the remote API and never edited in
//! place; everything the console shows is derived from it on demand.

mod domain;
pub mod filter;
mod print;
mod store;
pub mod table;

pub(crate) use domain::opaque_id;

pub use domain::{Candidate, CandidateId, Gender};
pub use filter::{visible, RosterFilter};
pub use print::{
    printable_document, PrintExporter, PrintOutcome, PrintSpooler, SpoolError, SystemSpooler,
};
pub use store::{FetchStatus, RosterStore};
