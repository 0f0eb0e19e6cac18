//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - build: Interactive terminal plan builder
//! - quote: Price a plan from flags
//! - catalog: List plans and bundle options
//! - config: Configuration display and validation

pub mod build;
pub mod catalog;
pub mod config;
pub mod quote;
