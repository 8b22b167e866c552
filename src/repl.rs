use reedline::{
    Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline, Signal,
};
use std::borrow::Cow;

const PRIMARY_PROMPT: &str = "sta> ";
const CONTINUATION_PROMPT: &str = "...> ";

/// Evaluates input collected by the interactive loop
pub trait ReplBackend {
    /// False while `code` is an unfinished multi-line statement
    fn is_complete(&self, code: &str) -> bool;

    /// Run a complete statement, reporting its own errors
    fn execute(&mut self, code: &str);
}

struct StaPrompt {
    is_continuation: bool,
}

impl Prompt for StaPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        if self.is_continuation {
            Cow::Borrowed(CONTINUATION_PROMPT)
        } else {
            Cow::Borrowed(PRIMARY_PROMPT)
        }
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({}reverse search) ", prefix))
    }
}

/// Append `line` to the pending statement buffer
fn push_line(buffer: &mut String, line: &str) {
    if !buffer.is_empty() {
        buffer.push('\n');
    }
    buffer.push_str(line);
}

/// Read-eval loop; returns when the user ends input with Ctrl+D
pub fn run(backend: &mut impl ReplBackend) -> anyhow::Result<()> {
    let mut line_editor = Reedline::create();
    let mut buffer = String::new();
    let mut prompt = StaPrompt {
        is_continuation: false,
    };

    loop {
        prompt.is_continuation = !buffer.is_empty();

        match line_editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => {
                push_line(&mut buffer, &line);

                if backend.is_complete(&buffer) {
                    if !buffer.trim().is_empty() {
                        backend.execute(&buffer);
                    }
                    buffer.clear();
                }
            }
            Ok(Signal::CtrlC) => {
                println!("^C");
                buffer.clear();
            }
            Ok(Signal::CtrlD) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_line_joins_with_newlines() {
        let mut buffer = String::new();
        push_line(&mut buffer, "def f():");
        push_line(&mut buffer, "    return 1");
        assert_eq!(buffer, "def f():\n    return 1");
    }

    #[test]
    fn prompt_switches_on_continuation() {
        let mut prompt = StaPrompt {
            is_continuation: false,
        };
        assert_eq!(prompt.render_prompt_left(), PRIMARY_PROMPT);
        prompt.is_continuation = true;
        assert_eq!(prompt.render_prompt_left(), CONTINUATION_PROMPT);
    }
}
