//! bm1pi library: application logic for the base (−1+i) converter.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
