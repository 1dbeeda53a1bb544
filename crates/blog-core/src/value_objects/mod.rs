//! Value objects - immutable types that represent domain concepts

mod identity;
mod snowflake;

pub use identity::Identity;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
