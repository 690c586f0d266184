//! Oracle prompt: system instruction, tool-list rendering, loop reminders.

use crate::tools::ToolSpec;

/// System prompt for the oracle.
pub const ORACLE_SYSTEM_PROMPT: &str = "\
You are the oracle, the decision maker of this agent. Given the user's query \
you must decide what to do with it based on the list of tools provided to you.

Your goal is to provide the user with an up-to-date answer together with the \
url of the website it came from.

When using a tool, reply with the tool name and the arguments to use in JSON \
format. For each call you MUST use exactly one tool AND the response format \
must ALWAYS follow the pattern:

{
    \"name\": \"<tool_name>\",
    \"parameters\": {\"<tool_input_key>\": <tool_input_value>}
}

Never use the search tool more than 3 times in a single turn.

After using the search tool you must summarize your findings with the \
final_answer tool. If the user asks a question or says something unrelated to \
answer seeking, use the final_answer tool directly.";

/// Instruction appended once search has been used: the next call must finish.
pub const FORCE_FINAL_ANSWER: &str = "You must now use the final_answer tool.";

/// System prompt plus the currently permitted tools.
pub fn render_system_prompt(system_prompt: &str, tools: &[ToolSpec]) -> String {
    let tools_str = tools
        .iter()
        .map(|t| serde_json::to_string_pretty(t).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n");
    format!("{system_prompt}\n\nYou may use the following tools:\n{tools_str}")
}

/// Reminder appended after the scratchpad so the model stays on the original query.
pub fn continue_reminder(input: &str) -> String {
    format!(
        "Please continue, as a reminder my query was '{input}'. Only answer to \
         the original query, and nothing else, but use the information I \
         provided to you to do so. Provide as much information as possible in \
         the `answer` field of the final_answer tool and remember to include \
         the urls of relevant websites."
    )
}
