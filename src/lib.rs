pub mod grouper;
pub mod output;
pub mod parser;
