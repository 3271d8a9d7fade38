//! Agent entity: one panel member's identity and bounded message history.

use super::value_objects::AgentId;
use crate::core::model::Model;
use crate::session::entities::Message;

/// Number of turn pairs an agent keeps by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// A single discussion participant (Entity)
///
/// Holds the immutable identity (`id`, `model`, `system_prompt`) and the
/// mutable history. The history is bounded to `2 * history_limit` entries
/// after every generation turn; older entries are evicted from the front.
///
/// Injected messages ([`Agent::inject`]) are appended without a bound
/// check, so the history may temporarily exceed the limit until the next
/// turn completes.
#[derive(Debug, Clone)]
pub struct Agent {
    id: AgentId,
    model: Model,
    system_prompt: String,
    history_limit: usize,
    history: Vec<Message>,
}

impl Agent {
    pub fn new(id: impl Into<AgentId>, model: Model, system_prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            model,
            system_prompt: system_prompt.into(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            history: Vec::new(),
        }
    }

    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self
    }

    pub fn id(&self) -> &AgentId {
        &self.id
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Maximum number of history entries retained after a turn.
    pub fn max_history_len(&self) -> usize {
        self.history_limit * 2
    }

    /// Start a generation turn.
    ///
    /// Appends `prompt` as a user message and returns the full request:
    /// the system prompt followed by the whole history. The user message
    /// stays in the history even if the turn later fails.
    pub fn begin_turn(&mut self, prompt: impl Into<String>) -> Vec<Message> {
        self.history.push(Message::user(prompt));

        let mut request = Vec::with_capacity(self.history.len() + 1);
        request.push(Message::system(self.system_prompt.clone()));
        request.extend(self.history.iter().cloned());
        request
    }

    /// Record the assistant reply of a successful turn.
    pub fn record_reply(&mut self, reply: impl Into<String>) {
        self.history.push(Message::assistant(reply));
    }

    /// Finish a turn: evict the oldest entries beyond `2 * history_limit`.
    pub fn end_turn(&mut self) {
        let max = self.max_history_len();
        if self.history.len() > max {
            let excess = self.history.len() - max;
            self.history.drain(..excess);
        }
    }

    /// Append a synthetic user message outside of a generation turn.
    pub fn inject(&mut self, content: impl Into<String>) {
        self.history.push(Message::user(content));
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::entities::Role;

    fn agent(limit: usize) -> Agent {
        Agent::new("Agent0", Model::default(), "be brief").with_history_limit(limit)
    }

    fn complete_turn(agent: &mut Agent, prompt: &str, reply: &str) {
        agent.begin_turn(prompt);
        agent.record_reply(reply);
        agent.end_turn();
    }

    #[test]
    fn test_begin_turn_builds_request_with_system_prompt_first() {
        let mut a = agent(5);
        complete_turn(&mut a, "p0", "r0");

        let request = a.begin_turn("p1");
        assert_eq!(request.len(), 4);
        assert_eq!(request[0], Message::system("be brief"));
        assert_eq!(request[1], Message::user("p0"));
        assert_eq!(request[2], Message::assistant("r0"));
        assert_eq!(request[3], Message::user("p1"));
        // The system prompt never lands in the history itself
        assert!(a.history().iter().all(|m| m.role != Role::System));
    }

    #[test]
    fn test_history_is_bounded_with_fifo_eviction() {
        let mut a = agent(2);
        for i in 0..5 {
            complete_turn(&mut a, &format!("p{i}"), &format!("r{i}"));
            assert!(a.history().len() <= a.max_history_len());
        }

        let contents: Vec<_> = a.history().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["p3", "r3", "p4", "r4"]);
    }

    #[test]
    fn test_failed_turn_keeps_user_message() {
        let mut a = agent(5);
        a.begin_turn("lonely prompt");
        a.end_turn();

        assert_eq!(a.history(), &[Message::user("lonely prompt")]);
    }

    #[test]
    fn test_inject_skips_bound_until_next_turn() {
        let mut a = agent(1);
        complete_turn(&mut a, "p0", "r0");
        a.inject("Summary from subgroup 2: ok");
        assert_eq!(a.history().len(), 3);

        complete_turn(&mut a, "p1", "r1");
        let contents: Vec<_> = a.history().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["p1", "r1"]);
    }

    #[test]
    fn test_clear_history() {
        let mut a = agent(3);
        complete_turn(&mut a, "p0", "r0");
        a.clear_history();
        assert!(a.history().is_empty());
        assert_eq!(a.id().as_str(), "Agent0");
    }
}
