//! Project descriptor I/O.
//!
//! - **reader**: legacy descriptor XML into a [`projconv_model::Project`]
//! - **writer**: a transformed project back out as an SDK-style descriptor

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{Result, XmlError};
pub use reader::{load_project, parse_project};
pub use writer::{DEFAULT_SDK, WINDOWS_DESKTOP_SDK, save_project, write_project};
