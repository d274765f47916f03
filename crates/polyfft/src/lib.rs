//! Library side of the polyfft binary: configuration, dispatch, output and
//! exit codes.

pub mod app;
pub mod config;
pub mod errors;
pub mod output;
