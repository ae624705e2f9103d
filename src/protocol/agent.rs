//! Agent discovery and capability types

use serde::{Deserialize, Serialize};
use url::Url;

use super::message::MessagePart;

/// Agent Card for agent discovery
///
/// The Agent Card is published at `/.well-known/agent.json` and describes
/// the agent's endpoint, capabilities and skills.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    /// Name of the agent
    pub name: String,

    /// Human-readable description of the agent
    pub description: String,

    /// JSON-RPC endpoint of the agent
    pub url: String,

    /// Organization operating the agent
    pub provider: AgentProvider,

    /// Agent version
    pub version: String,

    /// URL to agent documentation
    pub documentation_url: String,

    /// Agent capabilities
    pub capabilities: AgentCapabilities,

    /// MIME types accepted by default
    pub default_input_modes: Vec<String>,

    /// MIME types produced by default
    pub default_output_modes: Vec<String>,

    /// Skills the agent advertises
    pub skills: Vec<AgentSkill>,
}

impl AgentCard {
    /// Card for the coding assistant served from `base_url`
    pub fn code_helper(base_url: &Url) -> Self {
        let base = base_url.as_str().trim_end_matches('/');

        Self {
            name: "CodeHelperAgent".to_string(),
            description:
                "An AI agent to help with coding questions in Python, Django, and JavaScript."
                    .to_string(),
            url: format!("{}/api/", base),
            provider: AgentProvider {
                organization: "HNG Internship".to_string(),
                url: "https://hng.tech/".to_string(),
            },
            version: env!("CARGO_PKG_VERSION").to_string(),
            documentation_url: format!("{}/api/docs", base),
            capabilities: AgentCapabilities::default(),
            default_input_modes: vec!["text/plain".to_string()],
            default_output_modes: vec!["text/plain".to_string(), "application/json".to_string()],
            skills: vec![AgentSkill::coding_assistant()],
        }
    }
}

/// Organization operating an agent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentProvider {
    pub organization: String,
    pub url: String,
}

/// Agent capabilities
///
/// The agent is single-turn and stateless, so every capability is off.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentCapabilities {
    /// Supports streaming responses
    #[serde(default)]
    pub streaming: bool,

    /// Supports push notifications via webhooks
    #[serde(default)]
    pub push_notifications: bool,

    /// Records task state transitions
    #[serde(default)]
    pub state_transition_history: bool,
}

/// A skill advertised on the agent card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentSkill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub input_modes: Vec<String>,
    pub output_modes: Vec<String>,
    pub examples: Vec<SkillExample>,
}

impl AgentSkill {
    fn coding_assistant() -> Self {
        Self {
            id: "coding_assistant".to_string(),
            name: "Code Explanation & Snippets".to_string(),
            description: "Explains programming concepts and provides code snippets for Python, Django, and JavaScript.".to_string(),
            input_modes: vec!["text/plain".to_string()],
            output_modes: vec!["text/plain".to_string()],
            examples: vec![
                SkillExample::new(
                    "How do I loop through a list in Python?",
                    "You can loop through a list using a `for` loop:\n```python\nmy_list = ['item1', 'item2', 'item3']\nfor item in my_list:\n    print(item)\n```\nThis iterates over each element (`item`) in `my_list`.",
                ),
                SkillExample::new(
                    "How do I create a Django model?",
                    "In Django, you create a model by subclassing `models.Model` in your `models.py`:\n```python\nfrom django.db import models\n\nclass MyModel(models.Model):\n    name = models.CharField(max_length=100)\n    description = models.TextField(blank=True)\n    created_at = models.DateTimeField(auto_now_add=True)\n\n    def __str__(self):\n        return self.name\n```\nThen create and apply migrations:\n```bash\npython manage.py makemigrations\npython manage.py migrate\n```",
                ),
            ],
        }
    }
}

/// Example input/output pair for a skill
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillExample {
    pub input: ExampleContent,
    pub output: ExampleContent,
}

impl SkillExample {
    fn new(input: &str, output: &str) -> Self {
        Self {
            input: ExampleContent {
                parts: vec![MessagePart::text(input)],
            },
            output: ExampleContent {
                parts: vec![MessagePart::text(output)],
            },
        }
    }
}

/// Parts of a skill example message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExampleContent {
    pub parts: Vec<MessagePart>,
}
