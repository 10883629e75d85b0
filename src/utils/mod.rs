// Utility functions

pub mod filename;
pub mod logger;
pub mod text;

pub use filename::*;
pub use logger::*;
pub use text::*;
