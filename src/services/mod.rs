//! Person API services.

pub mod persons;

pub use persons::PersonsService;
