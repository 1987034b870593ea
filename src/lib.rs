//! Calcmcp - calculator tool server for the Model Context Protocol
//!
//! Calcmcp exposes a single `calculator` tool to MCP hosts (Claude Desktop and
//! similar AI agents). Expressions are delegated to the evalexpr library and
//! results are rendered with a fixed significant-figure display policy.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and dispatch)
//! - `evaluator`: Expression evaluation and result formatting
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod evaluator;
pub mod mcp;
