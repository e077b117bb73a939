use super::{SourceCheckHandler, SourceChecker};
use crate::error::{Result, SourceError};
use crate::message::Message;
use crate::source::Source;
use log::{debug, trace};
use std::time::SystemTime;

const SOLUTION: &str =
    "Add handler for the source or make the source implement 'SelfCheckingSource'.";

/// Checker trying handlers in the order they were added.
#[derive(Default)]
pub struct DefaultSourceChecker {
    handlers: Vec<Box<dyn SourceCheckHandler>>,
}

impl DefaultSourceChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_handler(&mut self, handler: Box<dyn SourceCheckHandler>) {
        self.handlers.push(handler);
    }

    pub fn with_handler(mut self, handler: Box<dyn SourceCheckHandler>) -> Self {
        self.add_handler(handler);
        self
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    fn handler_for(&self, source: &dyn Source) -> Option<&dyn SourceCheckHandler> {
        debug!(
            "'{}' does not check itself, looking for a handler",
            source.type_name()
        );

        self.handlers.iter().map(|handler| &**handler).find(|handler| {
            let supported = handler.supported();
            match supported.iter().find(|t| t.matches(source)) {
                Some(matched) => {
                    trace!("Handler for '{}' matched", matched.name());
                    true
                }
                None => false,
            }
        })
    }
}

fn no_handler(context: String) -> SourceError {
    SourceError::invalid_state(
        Message::new("No handler handles this source.")
            .with_context(context)
            .with_solution(SOLUTION),
    )
}

impl SourceChecker for DefaultSourceChecker {
    fn is_valid(&self, source: &dyn Source) -> Result<bool> {
        if let Some(source) = source.as_self_checking() {
            return Ok(source.is_valid());
        }

        match self.handler_for(source) {
            Some(handler) => handler.is_valid(source),
            None => Err(no_handler(format!(
                "Checking whether '{}' is a valid source.",
                source.type_name()
            ))),
        }
    }

    fn last_change(&self, source: &dyn Source) -> Result<SystemTime> {
        if let Some(source) = source.as_self_checking() {
            return source.last_change();
        }

        match self.handler_for(source) {
            Some(handler) => handler.last_change(source),
            None => Err(no_handler(format!(
                "Getting last change of a source '{}'.",
                source.type_name()
            ))),
        }
    }
}
