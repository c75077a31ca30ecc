//! Input reading from arguments and stdin.

mod reader;

pub use reader::InputReader;
