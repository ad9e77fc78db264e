//! Blockdown Core
//!
//! This crate provides the data model, error definitions, and options
//! for the blockdown markdown block parser.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Container`], [`ContainerKind`], [`Element`], [`Leaf`] - The container tree
//! - [`ListType`], [`NumDelim`] - List classification enums
//! - [`Block`], [`Blocks`], [`CodeAttr`], [`Inlines`] - The block AST
//! - [`ReferenceMap`] - The link-reference accumulator
//! - [`ParseOptions`] - Recognised parser options
//! - [`BlockdownError`] - Error types

pub mod blocks;
pub mod enums;
pub mod error;
pub mod options;
pub mod refmap;
pub mod tree;

pub use blocks::{Block, Blocks, CodeAttr, Inlines};
pub use enums::{ListType, NumDelim};
pub use error::{BlockdownError, Result};
pub use options::ParseOptions;
pub use refmap::{ReferenceMap, normalize_label};
pub use tree::{Container, ContainerKind, Element, Leaf};
