pub mod application;
pub mod cli;
pub mod domain;
pub mod io;
pub mod source;

pub use domain::*;
pub use source::RecordSource;
