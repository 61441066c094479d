pub mod token;
pub mod lexer;

pub mod prelude {
    pub use super::{
        token::*,
        lexer::*,
    };
}

#[cfg(test)]
mod tests;
