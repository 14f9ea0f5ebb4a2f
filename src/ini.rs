//! Main module for inidoc library functionality
//!
//! Parsing happens in two passes over the input:
//!
//! 1. [lexing] scans characters left to right and yields typed tokens, one per pull.
//! 2. [parsing] consumes those tokens in lock-step and assembles the [ast::Document].
//!
//! Neither pass backtracks and neither keeps state outside the values created for a
//! single parse call.

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;
pub mod token;
