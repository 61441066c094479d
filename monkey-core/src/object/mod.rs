pub mod builtins;
pub mod environment;
pub mod object;

pub mod prelude {
    pub use super::{
        builtins::*,
        environment::*,
        object::*,
    };
}
