//! Structured error messages.
//!
//! A [`Message`] is rendered one labelled line per part:
//!
//! ```text
//! Context: Creating 'AnnotationSource'.
//! Problem: Targeted source does not have any annotations.
//! Hint: ...
//! ```
//!
//! A message with only a problem renders as the bare problem text.

use std::fmt;

/// Error message split into context, problem and optional extra parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    context: Option<String>,
    problem: String,
    extra: Vec<(String, String)>,
}

impl Message {
    /// Create a message describing a problem.
    pub fn new(problem: impl Into<String>) -> Self {
        Self {
            context: None,
            problem: problem.into(),
            extra: Vec::new(),
        }
    }

    /// Describe what was being done when the problem occurred.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Suggest how to fix the problem.
    pub fn with_solution(self, solution: impl Into<String>) -> Self {
        self.with("Solution", solution)
    }

    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        self.with("Hint", hint)
    }

    /// Append an arbitrary labelled part.
    pub fn with(mut self, label: impl Into<String>, text: impl Into<String>) -> Self {
        self.extra.push((label.into(), text.into()));
        self
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn problem(&self) -> &str {
        &self.problem
    }

    /// Text of the first extra part with the given label.
    pub fn part(&self, label: &str) -> Option<&str> {
        self.extra
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, text)| text.as_str())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.context.is_none() && self.extra.is_empty() {
            return f.write_str(&self.problem);
        }

        if let Some(context) = &self.context {
            writeln!(f, "Context: {context}")?;
        }
        write!(f, "Problem: {}", self.problem)?;
        for (label, text) in &self.extra {
            write!(f, "\n{label}: {text}")?;
        }
        Ok(())
    }
}
