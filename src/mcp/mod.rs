//! Model Context Protocol (MCP) server implementation.
//!
//! This module exposes the calculator tool to AI assistants like Claude
//! Desktop. The server implements the MCP specification for tool calling
//! over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific type definitions

mod server;
pub mod types;

pub use server::{CalculatorServer, run_server};
