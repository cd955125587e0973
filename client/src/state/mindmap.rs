//! Mindmap container state.
//!
//! The container shows either the instructional placeholder or a single root
//! node built from the submitted topic. The node's actions are stubs that only
//! announce the feature is not available yet.

#[cfg(test)]
#[path = "mindmap_test.rs"]
mod mindmap_test;

pub const PLACEHOLDER_TEXT: &str = "Enter a topic above to start creating your mindmap";
pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter a topic";
pub const COMING_SOON_MESSAGE: &str = "Feature coming soon!";

/// Buttons rendered on a mindmap node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeAction {
    Expand,
    GenerateSteps,
    Analyze,
}

impl NodeAction {
    pub const ALL: [NodeAction; 3] = [NodeAction::Expand, NodeAction::GenerateSteps, NodeAction::Analyze];

    pub fn label(self) -> &'static str {
        match self {
            Self::Expand => "Expand",
            Self::GenerateSteps => "Generate Steps",
            Self::Analyze => "Analyze",
        }
    }

    /// Message shown when the action is triggered.
    pub fn outcome_message(self) -> &'static str {
        COMING_SOON_MESSAGE
    }
}

/// A rendered node. Only the root exists; there are no children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MindmapNode {
    pub topic: String,
}

impl MindmapNode {
    pub fn actions(&self) -> &'static [NodeAction] {
        &NodeAction::ALL
    }
}

/// What the mindmap container currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MindmapContent {
    #[default]
    Placeholder,
    Node(MindmapNode),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MindmapState {
    /// Current value of the topic input.
    pub topic_input: String,
    pub content: MindmapContent,
}

impl MindmapState {
    /// Replace the container with a node for the trimmed topic input.
    ///
    /// # Errors
    ///
    /// Returns `EMPTY_TOPIC_MESSAGE` when the input is blank; the container
    /// is left as it was.
    pub fn create(&mut self) -> Result<MindmapNode, &'static str> {
        let topic = self.topic_input.trim();
        if topic.is_empty() {
            return Err(EMPTY_TOPIC_MESSAGE);
        }
        let node = MindmapNode { topic: topic.to_owned() };
        self.content = MindmapContent::Node(node.clone());
        Ok(node)
    }

    /// Reset the container to the placeholder and empty the input.
    pub fn clear(&mut self) {
        self.topic_input.clear();
        self.content = MindmapContent::Placeholder;
    }

    pub fn node(&self) -> Option<&MindmapNode> {
        match &self.content {
            MindmapContent::Node(node) => Some(node),
            MindmapContent::Placeholder => None,
        }
    }
}
