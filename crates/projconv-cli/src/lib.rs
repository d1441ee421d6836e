//! Library components of the `projconv` converter.

pub mod convert;
pub mod discovery;
pub mod logging;
pub mod types;
