pub mod config;

pub mod dispatcher;

pub mod error;

pub mod rational;

pub mod utils;

pub use error::{Error, Result};
pub use rational::{Operand, Rational};
pub use utils::math::{greatest_common_divisor, int_to_buffer};

pub mod prelude {
    pub use crate::config::ReplConfig;
    pub use crate::dispatcher::{DispatchResult, Dispatcher};
    pub use crate::error::Error;
    pub use crate::rational::{Operand, Rational};
}
