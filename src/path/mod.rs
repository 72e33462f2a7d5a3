mod expander;
mod resolver;

pub use expander::PathExpander;
pub use resolver::{is_executable, PathResolver};
