use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::evaluator::calculate;

use super::types::CalculateParams;

#[derive(Clone)]
pub struct CalculatorServer {
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CalculatorServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Evaluate a mathematical expression and return the formatted result
    #[tool(
        description = "Execute mathematical calculations using a math expression evaluator."
    )]
    pub async fn calculator(
        &self,
        params: Parameters<CalculateParams>,
    ) -> Result<CallToolResult, McpError> {
        let expression = &params.0.expression;

        // The schema declares minLength 1; enforce it here for hosts that
        // skip client-side validation. Whitespace-only input is not a
        // protocol error and falls through to the evaluator.
        if expression.is_empty() {
            return Err(McpError::invalid_params("expression cannot be empty", None));
        }

        let result_text = calculate(expression);

        Ok(CallToolResult::success(vec![Content::text(result_text)]))
    }
}

impl Default for CalculatorServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for CalculatorServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "calculator".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Calculator MCP server for evaluating mathematical expressions.\n\n\
                 Available tools:\n\
                 1. calculator - Evaluate an expression (arithmetic, functions, tuples)\n\n\
                 Results are returned as a single text message. Non-integer numbers\n\
                 are rounded to 3 significant figures. Invalid expressions return a\n\
                 'Calculation failed' message instead of an error."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = CalculatorServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
