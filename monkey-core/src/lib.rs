pub mod eval;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod utils;
