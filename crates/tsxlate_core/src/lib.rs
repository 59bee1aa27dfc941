//! # tsxlate_core
//!
//! Core translation engine for tsxlate.
//!
//! This crate provides:
//! - The [`OutputTree`] model and its re-indenting stringification
//! - The [`Visitor`] trait with default renderings and a catch-all [`fallback`]
//! - The traversal driver ([`translate`], [`translate_source`], [`visit`])
//! - Provided visitors: [`NoopVisitor`], [`DefaultVisitor`], [`PythonVisitor`]
//! - Configuration loading ([`TranslateConfig`], [`Target`])
//!
//! ## Example
//!
//! ```rust,ignore
//! use tsxlate_core::{PythonVisitor, translate};
//! use tsxlate_parser::TypeScriptParser;
//!
//! let output = translate(&TypeScriptParser::new(), "add.ts", &PythonVisitor)?;
//! println!("{}", output);
//! println!("{} unknown syntax nodes", output.unknown_count());
//! ```

mod config;
mod context;
mod driver;
mod error;
mod literal;
mod output;
mod visitor;
pub mod visitors;

pub use config::{CONFIG_FILES, Target, TranslateConfig};
pub use context::Context;
pub use driver::{translate, translate_source, visit};
pub use error::{RequiredField, TranslateError};
pub use literal::string_value;
pub use output::{EMPTY_NODE, OutputOptions, OutputTree};
pub use visitor::{Visitor, fallback};
pub use visitors::{DefaultVisitor, NoopVisitor, PythonVisitor, snake_case};
