//! Filesystem access for the toast configuration validator
//!
//! Locates an Angular project's wiring and settings files and reads them
//! with a size bound.

pub mod constants;
pub mod error;
pub mod io;
pub mod locate;
pub mod path;

pub use constants::ConfigFile;
pub use error::{Error, Result};
pub use locate::{ConfigFileLocations, ConfigLocator};
pub use path::resolve;
