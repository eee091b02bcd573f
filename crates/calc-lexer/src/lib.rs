//! calc lexer: converts expression text into a token stream.

pub mod chars;
pub mod lexer;
pub mod token;

pub use chars::{ascii_decimal, is_blank};
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
