//! treebridge converts a resolved external syntax tree into a canonical AST.
//!
//! The upstream parser's tree ([`syntax`]) and the facts a resolver knows
//! about it ([`binding`]) go in; validated [`ast`] nodes come out. Use
//! [`convert_unit`] for whole files and [`TreeConverter`] for anything
//! smaller.

pub use crate::config::{ConfigError, ConverterOptions, Environment};
pub use crate::convert::{convert_unit, TreeConverter};
pub use crate::errors::{ConvertError, ErrorCategory, Result, SourceContext};

pub mod ast;
pub mod binding;
pub mod config;
pub mod convert;
pub mod errors;
pub mod syntax;
pub mod validate;
