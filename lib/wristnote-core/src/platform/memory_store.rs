use crate::platform::{
    MessageContent, MessageStore, NotificationId, PlatformErrorType, PlatformResult,
};
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One message in a store file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMessage {
    pub id: NotificationId,
    #[serde(flatten)]
    pub content: MessageContent,
}

/// Message store held in memory, optionally seeded from a YAML list of messages.
#[derive(Debug, Default)]
pub struct MemoryMessageStore {
    messages: HashMap<NotificationId, MessageContent>,
}

impl MemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path).map_err(|e| {
            format!("Failed to read message store '{}': {}", path.display(), e)
        })?;
        let store = Self::from_yaml(&contents).map_err(|e| {
            format!("Failed to parse message store '{}': {}", path.display(), e)
        })?;
        trace!(
            "Loaded {} messages from {}",
            store.messages.len(),
            path.display()
        );
        Ok(store)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        let messages: Vec<StoredMessage> = serde_yaml::from_str(contents)?;
        Ok(messages.into_iter().collect())
    }

    pub fn insert(&mut self, id: NotificationId, content: MessageContent) {
        self.messages.insert(id, content);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl FromIterator<StoredMessage> for MemoryMessageStore {
    fn from_iter<T: IntoIterator<Item = StoredMessage>>(iter: T) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|message| (message.id, message.content))
                .collect(),
        }
    }
}

impl MessageStore for MemoryMessageStore {
    fn lookup(&self, id: &NotificationId) -> PlatformResult<MessageContent> {
        self.messages
            .get(id)
            .cloned()
            .ok_or_else(|| PlatformErrorType::NotFound.into())
    }
}
