use depscore::prelude::*;
use std::cell::RefCell;

/// Mock ProgressReporter that captures messages
#[derive(Default)]
pub struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter(|m| m.starts_with("Error: "))
            .collect()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn start_waiting(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Waiting: {}", message));
    }

    fn finish_waiting(&self) {
        self.messages.borrow_mut().push("Done waiting".to_string());
    }

    fn report_error(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Completed: {}", message));
    }
}
