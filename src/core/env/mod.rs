mod paths;

pub use paths::{abbreviate_home, DirectoryContext};
