pub mod cli;
pub mod domain;
pub mod io;

pub use domain::*;
pub use io::Exporter;
