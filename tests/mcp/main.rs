
/// Extract the text payload from a successful CallToolResult
///
/// Panics if the result indicates an error or carries no text content
pub fn extract_tool_result_text(result: &rmcp::model::CallToolResult) -> String {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );
    assert_eq!(
        result.content.len(),
        1,
        "Tool result should have exactly one content block"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    text_content.text.clone()
}
