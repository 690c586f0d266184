//! Agent action: one tool selection parsed from a model reply.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AgentError;

/// A record of one tool selection.
///
/// Created when the oracle parses a model decision; completed once by
/// attaching the tool's output; never deleted, only accumulated for the
/// duration of one turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentAction {
    pub tool_name: String,
    /// Model-supplied arguments (a JSON object).
    pub tool_input: Value,
    /// Tool output text; `None` until the tool has run.
    pub tool_output: Option<String>,
}

impl AgentAction {
    /// Parses a tool selection out of a free-text model reply.
    ///
    /// The reply may wrap the JSON object in prose; the first balanced
    /// `{...}` that parses as an object wins. Required keys are `name`
    /// (string) and `parameters`. Anything else is [`AgentError::MalformedAction`],
    /// which is fatal for the turn.
    pub fn parse_completion(text: &str) -> Result<Self, AgentError> {
        let object = extract_json_object(text).ok_or_else(|| {
            AgentError::MalformedAction(format!("no JSON object in model reply: {}", excerpt(text)))
        })?;
        let tool_name = object
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| AgentError::MalformedAction("missing \"name\" key".to_string()))?
            .to_string();
        let tool_input = object
            .get("parameters")
            .cloned()
            .ok_or_else(|| AgentError::MalformedAction("missing \"parameters\" key".to_string()))?;
        Ok(Self {
            tool_name,
            tool_input,
            tool_output: None,
        })
    }

    /// The selection as the `{"name": .., "parameters": ..}` JSON the prompt
    /// format prescribes; used to replay the action as an assistant message.
    pub fn to_invocation_json(&self) -> String {
        serde_json::json!({
            "name": self.tool_name,
            "parameters": self.tool_input,
        })
        .to_string()
    }
}

impl std::fmt::Display for AgentAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tool: {}\nInput: {}", self.tool_name, self.tool_input)?;
        if let Some(output) = &self.tool_output {
            write!(f, "\nOutput: {output}")?;
        }
        Ok(())
    }
}

/// Finds the first balanced `{...}` in `text` that parses as a JSON object.
///
/// Brace matching is string- and escape-aware so braces inside string values
/// do not end the object early. A candidate that fails to parse does not stop
/// the scan; the next `{` is tried.
fn extract_json_object(text: &str) -> Option<Value> {
    let mut from = 0;
    while let Some(open) = text[from..].find('{').map(|i| i + from) {
        if let Some(end) = balanced_end(text.as_bytes(), open) {
            if let Ok(value) = serde_json::from_str::<Value>(&text[open..=end]) {
                if value.is_object() {
                    return Some(value);
                }
            }
        }
        from = open + 1;
    }
    None
}

/// Byte index of the `}` closing the object opened at `open`, if balanced.
fn balanced_end(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, &b) in bytes.iter().enumerate().skip(open) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn excerpt(text: &str) -> String {
    const MAX: usize = 200;
    if text.len() <= MAX {
        text.to_string()
    } else {
        let mut end = MAX;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}
