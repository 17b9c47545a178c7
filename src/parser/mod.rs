// Option-string parsers

pub mod lexer;
pub mod limits;
pub mod shorthand;

// Public API re-exports
pub use limits::parse_limits;
pub use shorthand::{parse_channel_arg, parse_shorthand, Shorthand, Wrapper};
