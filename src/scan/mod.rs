//! Placeholder scanning and column resolution.

mod normalize;
mod resolver;
mod scanner;

pub use normalize::{fold_name, normalize_text};
pub use resolver::{resolve, ColumnEntry};
pub use scanner::{default_delimiters, DelimiterPair, PlaceholderToken, Scanner, TokenKind};
