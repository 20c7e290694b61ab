//! Main module for calc-parser library functionality

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod processor;
pub mod testing;
pub mod token;
pub mod validity;
