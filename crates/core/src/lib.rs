//! Core library for toolspark
//!
//! This crate implements the **Functional Core** of the toolspark application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`toolspark_core`** (this crate): Pure tool logic with zero I/O
//! - **`toolspark`**: The invocation pipeline, collaborators (LLM, QR raster),
//!   the CLI and the MCP server (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No I/O**: Clocks, random sources and network calls are passed in or
//!   live in the shell
//! - **Displayable failures**: Validation problems become result strings,
//!   never panics
//!
//! # Module Organization
//!
//! - [`glyph`]: The ten stylish text transforms and the engine that runs them
//! - [`usage`]: The process-wide usage counter and its redirect threshold
//! - [`catalog`]: The tools offered by the launcher
//! - [`calc`]: Age, EMI, GPA, percentage and currency calculators
//! - [`daily`]: Password generator, random picker, stylish text input checks
//! - [`ai`]: Prompt construction for the AI tools
//! - [`qr`]: QR rendering options and logo geometry
//! - [`output`]: The value a tool run produces
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use toolspark_core::glyph::apply_all_styles;
//!
//! let results = apply_all_styles("hello");
//! assert_eq!(results.len(), 10);
//! assert_eq!(results[0].name, "Bubbles");
//! ```

pub mod ai;
pub mod calc;
pub mod catalog;
pub mod daily;
pub mod glyph;
pub mod output;
pub mod qr;
pub mod usage;
