//! The frontend module handles corpus intake for the poet.
//!
//! This module provides:
//! - **corpus**: Reading a corpus resource and splitting it into
//!   whitespace-delimited tokens

pub mod corpus;
