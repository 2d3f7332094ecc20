//! Utility modules shared by the library and the command line.

pub mod path;
