use anyhow::*;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;

use super::{Console, Message};

#[derive(Clone)]
pub struct MockConsole {
    messages: Arc<RwLock<Vec<Message>>>,
    script: Arc<RwLock<VecDeque<String>>>,
}

impl MockConsole {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
            script: Arc::new(RwLock::new(VecDeque::new())),
        }
    }

    pub fn type_line(&self, line: &str) {
        self.script.write().push_back(line.to_owned());
    }

    pub fn flush(&mut self) -> Vec<Message> {
        std::mem::replace(&mut *self.messages.write(), Vec::new())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.messages.read().iter().any(|m| m == message)
    }
}

impl Console for MockConsole {
    fn say(&mut self, message: &Message) {
        self.messages.write().push(message.clone());
    }

    fn prompt(&mut self, message: &Message) -> Result<String> {
        self.messages.write().push(message.clone());
        self.script
            .write()
            .pop_front()
            .context("Ran out of scripted input")
    }
}
