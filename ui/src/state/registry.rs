//! Agent list and chat selection owned by the index page

use super::draft::AgentSubmission;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// What the index page shows
#[derive(Debug, PartialEq, Eq)]
pub enum IndexView<'a> {
    Chat(&'a Agent),
    Grid(&'a [Agent]),
    Empty,
}

#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    agents: Vec<Agent>,
    open: Option<String>,
    last_id: u64,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Appends an agent built from a submission. Files, URLs and the crawl
    /// flag are not kept on the agent.
    ///
    /// Ids are creation timestamps in milliseconds; a second creation in the
    /// same millisecond takes the next free value so ids never repeat.
    pub fn create(&mut self, submission: &AgentSubmission, now_ms: u64) -> Agent {
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;

        let agent = Agent {
            id: id.to_string(),
            name: submission.name.clone(),
            description: submission.description.clone(),
        };
        self.agents.push(agent.clone());
        agent
    }

    /// Removes the agent with `id`. Deleting the agent whose chat is open
    /// also closes the chat.
    pub fn delete(&mut self, id: &str) -> Option<Agent> {
        let index = self.agents.iter().position(|a| a.id == id)?;
        let removed = self.agents.remove(index);
        if self.open.as_deref() == Some(id) {
            self.open = None;
        }
        Some(removed)
    }

    /// Selects an agent for chat. Unknown ids are refused.
    pub fn open_chat(&mut self, id: &str) -> bool {
        if self.agents.iter().any(|a| a.id == id) {
            self.open = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn close_chat(&mut self) {
        self.open = None;
    }

    pub fn open_agent(&self) -> Option<&Agent> {
        let id = self.open.as_deref()?;
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn view(&self) -> IndexView<'_> {
        if let Some(agent) = self.open_agent() {
            IndexView::Chat(agent)
        } else if self.agents.is_empty() {
            IndexView::Empty
        } else {
            IndexView::Grid(&self.agents)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str) -> AgentSubmission {
        AgentSubmission {
            name: name.to_string(),
            description: String::new(),
            files: vec![],
            urls: vec!["https://example.com".to_string()],
            recursive: false,
        }
    }

    #[test]
    fn test_create_appends_agent_with_unique_id() {
        let mut registry = AgentRegistry::new();
        let first = registry.create(&submission("Bar"), 1_700_000_000_000);

        let created = registry.create(&submission("Foo"), 1_700_000_000_000);

        assert_eq!(registry.len(), 2);
        assert_eq!(created.name, "Foo");
        assert_ne!(created.id, first.id);
        assert_eq!(registry.agents().iter().filter(|a| a.name == "Foo").count(), 1);
    }

    #[test]
    fn test_ids_follow_clock_and_never_go_backwards() {
        let mut registry = AgentRegistry::new();
        let a = registry.create(&submission("a"), 500);
        let b = registry.create(&submission("b"), 400);
        let c = registry.create(&submission("c"), 900);

        assert_eq!(a.id, "500");
        assert_eq!(b.id, "501");
        assert_eq!(c.id, "900");
    }

    #[test]
    fn test_delete_removes_exactly_one_and_keeps_order() {
        let mut registry = AgentRegistry::new();
        for (i, name) in ["a", "b", "c", "d"].iter().enumerate() {
            registry.create(&submission(name), 10 + i as u64);
        }

        let removed = registry.delete("11").unwrap();

        assert_eq!(removed.name, "b");
        let names: Vec<_> = registry.agents().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut registry = AgentRegistry::new();
        registry.create(&submission("a"), 1);

        assert!(registry.delete("42").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_view_switches_between_empty_grid_and_chat() {
        let mut registry = AgentRegistry::new();
        assert_eq!(registry.view(), IndexView::Empty);

        let agent = registry.create(&submission("Foo"), 7);
        assert!(matches!(registry.view(), IndexView::Grid(list) if list.len() == 1));

        assert!(registry.open_chat(&agent.id));
        assert_eq!(registry.view(), IndexView::Chat(&agent));

        registry.close_chat();
        assert!(matches!(registry.view(), IndexView::Grid(_)));
    }

    #[test]
    fn test_open_chat_rejects_unknown_agent() {
        let mut registry = AgentRegistry::new();
        assert!(!registry.open_chat("missing"));
        assert!(registry.open_agent().is_none());
    }

    #[test]
    fn test_deleting_open_agent_closes_chat() {
        let mut registry = AgentRegistry::new();
        let foo = registry.create(&submission("Foo"), 1);
        let bar = registry.create(&submission("Bar"), 2);
        registry.open_chat(&foo.id);

        registry.delete(&bar.id);
        assert_eq!(registry.open_agent(), Some(&foo));

        registry.delete(&foo.id);
        assert!(registry.open_agent().is_none());
        assert_eq!(registry.view(), IndexView::Empty);
    }
}
