//! Library surface of the portal CLI: logging setup shared with tests.

pub mod logging;
