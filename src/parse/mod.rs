pub mod output;
pub mod tokenize;

pub use output::{ParseConfig, SkipRule, parse};
pub use tokenize::{display, tokenize};
