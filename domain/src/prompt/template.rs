//! Prompt templates for the panel flow

/// Reply substituted when an agent's generation call fails.
pub const RESPONSE_ERROR: &str = "Error generating response.";
/// Reply substituted when the backend returns no content.
pub const EMPTY_RESPONSE: &str = "No response";
/// Summary substituted when a subgroup summary call fails.
pub const SUMMARY_ERROR: &str = "Error summarizing conversation.";
/// Summary substituted when the backend returns no content.
pub const EMPTY_SUMMARY: &str = "No summary available.";
/// Final report substituted when the report call fails.
pub const REPORT_ERROR: &str = "Error summarizing shared insights.";
/// Final report substituted when the backend returns no content.
pub const EMPTY_REPORT: &str = "No final report available.";

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt shared by every panel member
    pub fn panelist_system() -> &'static str {
        "You are a polite, thoughtful and intelligent panel discussion member. \
You are an expert level subject matter expert on the topics discussed. \
Provide thoughtful, insightful and respectful responses to the other panel members. \
Keep it concise and to the point. \
Share new ideas that arise during the discussion to add depth and breadth to the conversation. \
If given a specific problem, focus on solving the problem in novel ways."
    }

    /// First prompt of a conversation when no explicit prompt is given
    pub fn opening(topic: &str) -> String {
        format!("Let's discuss: {}. What are your initial thoughts?", topic)
    }

    /// Prompt handed to the next speaker, quoting the previous reply verbatim
    pub fn follow_up(agent_id: &str, response: &str) -> String {
        format!("Agent {} said: {}. What are your thoughts?", agent_id, response)
    }

    /// Prompt opening round `round` (0-based) after insights were shared
    pub fn round_opening(round: usize) -> String {
        format!(
            "Round {}: Discussing insights from other subgroups.",
            round + 1
        )
    }

    /// One transcript line
    pub fn transcript_line(agent_id: &str, response: &str) -> String {
        format!("{}: {}", agent_id, response)
    }

    /// System prompt for subgroup summaries
    pub fn summary_system() -> &'static str {
        "You are an AI assistant that summarizes conversations. \
Provide a concise summary of the following conversation, highlighting the key insights:"
    }

    /// Message injected into other subgroups' histories (`subgroup` is 0-based)
    pub fn shared_summary(subgroup: usize, summary: &str) -> String {
        format!("Summary from subgroup {}: {}", subgroup + 1, summary)
    }

    /// System prompt for the final report
    pub fn final_report_system(topic: &str) -> String {
        format!(
            "You are an AI assistant that summarizes a set of shared insights and generates a final report. \
Provide a concise summary of the following insights, highlighting the key conclusions reached by the agents during the discussions about {}:",
            topic
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_mentions_topic() {
        assert_eq!(
            PromptTemplate::opening("tokenizers"),
            "Let's discuss: tokenizers. What are your initial thoughts?"
        );
    }

    #[test]
    fn test_follow_up_quotes_reply() {
        assert_eq!(
            PromptTemplate::follow_up("Agent1", "I agree"),
            "Agent Agent1 said: I agree. What are your thoughts?"
        );
    }

    #[test]
    fn test_round_opening_is_one_based() {
        assert_eq!(
            PromptTemplate::round_opening(1),
            "Round 2: Discussing insights from other subgroups."
        );
    }

    #[test]
    fn test_shared_summary_is_one_based() {
        assert_eq!(
            PromptTemplate::shared_summary(0, "ok"),
            "Summary from subgroup 1: ok"
        );
    }

    #[test]
    fn test_final_report_system_names_topic() {
        assert!(PromptTemplate::final_report_system("math").ends_with("about math:"));
    }
}
