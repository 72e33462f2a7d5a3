pub mod config;
pub mod error;
pub mod flags;
pub mod shell;

pub mod core;
pub mod highlight;
pub mod input;
pub mod path;
pub mod process;

#[cfg(test)]
pub(crate) mod test_utils;
