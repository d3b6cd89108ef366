//! mdoutline: linked tables of contents for trees of markdown documents.
//!
//! Each document goes through the same pipeline: the markdown is tokenized into flat
//! open/close/self-closing events ([`token`], [`formats`]), the events are nested into a render
//! tree ([`render_tree`]), the headings are picked off its top level and nested by level
//! ([`heading`]), and the heading tree is rendered as an indented list of links ([`outline`]).
//! [`creator`] runs that pipeline over every document under an input path and stitches the
//! results into one file.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod creator;
pub mod error;
pub mod formats;
pub mod hash;
pub mod heading;
pub mod input;
pub mod outline;
pub mod render_tree;
pub mod token;

pub use error::{OutlineError, Result};
