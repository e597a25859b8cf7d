//! Canned replies for the chat widget.
//!
//! Replies are chosen by an ordered list of keyword rules. The message is
//! lower-cased and each rule is checked in turn; the first rule with a
//! keyword contained in the message wins. Containment is plain substring
//! matching, so "will" triggers the `ill` keyword.

/// The kind of reply a message received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyCategory {
    ProductInquiry,
    Consultation,
    Pricing,
    Shipping,
    General,
}

#[derive(Debug, Clone, Copy)]
pub struct ChatRule {
    pub category: ReplyCategory,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl ChatRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Rules in priority order.
pub const RULES: [ChatRule; 4] = [
    ChatRule {
        category: ReplyCategory::ProductInquiry,
        keywords: &["food", "feed"],
        reply: "We offer a variety of premium pet foods. Would you like to see our products?",
    },
    ChatRule {
        category: ReplyCategory::Consultation,
        keywords: &["sick", "ill"],
        reply: "I'm sorry to hear that. Would you like to book a consultation with our veterinarians?",
    },
    ChatRule {
        category: ReplyCategory::Pricing,
        keywords: &["price", "cost"],
        reply: "Our prices vary depending on the product. You can check our product section for detailed pricing.",
    },
    ChatRule {
        category: ReplyCategory::Shipping,
        keywords: &["delivery", "shipping"],
        reply: "We offer free delivery on orders over ₹2000. Standard delivery takes 2-3 business days.",
    },
];

pub const FALLBACK_REPLY: &str =
    "I'm here to help! You can ask me about our products, services, or book a consultation.";

/// Stateless classifier over an ordered rule list.
#[derive(Debug, Clone)]
pub struct ChatResponder {
    rules: Vec<ChatRule>,
    fallback: &'static str,
}

impl Default for ChatResponder {
    fn default() -> Self {
        Self {
            rules: RULES.to_vec(),
            fallback: FALLBACK_REPLY,
        }
    }
}

impl ChatResponder {
    pub fn rules(&self) -> &[ChatRule] {
        &self.rules
    }

    /// First matching rule for `message`, if any.
    pub fn matching_rule(&self, message: &str) -> Option<&ChatRule> {
        let lowered = message.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    pub fn classify(&self, message: &str) -> ReplyCategory {
        self.matching_rule(message)
            .map_or(ReplyCategory::General, |rule| rule.category)
    }

    /// Never fails; unmatched input gets the fallback reply.
    pub fn respond(&self, message: &str) -> &'static str {
        self.matching_rule(message)
            .map_or(self.fallback, |rule| rule.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_answers_its_own_keywords() {
        let responder = ChatResponder::default();
        for rule in responder.rules() {
            for keyword in rule.keywords {
                assert_eq!(responder.classify(keyword), rule.category, "keyword {keyword}");
                assert_eq!(responder.respond(keyword), rule.reply);
            }
        }
    }

    #[test]
    fn test_matching_ignores_case() {
        let responder = ChatResponder::default();
        assert_eq!(responder.classify("Do you SHIP? what about SHIPPING"), ReplyCategory::Shipping);
        assert_eq!(responder.classify("FEED schedule"), ReplyCategory::ProductInquiry);
    }

    #[test]
    fn test_first_match_wins() {
        let responder = ChatResponder::default();
        assert_eq!(
            responder.classify("my pet is sick and the food is expensive"),
            ReplyCategory::ProductInquiry
        );
        assert_eq!(responder.classify("What's the delivery cost?"), ReplyCategory::Pricing);
        assert_eq!(responder.classify("sick pet, shipping price?"), ReplyCategory::Consultation);
    }

    #[test]
    fn test_substring_containment() {
        let responder = ChatResponder::default();
        assert_eq!(responder.classify("I will come by tomorrow"), ReplyCategory::Consultation);
        assert_eq!(responder.classify("seafood?"), ReplyCategory::ProductInquiry);
    }

    #[test]
    fn test_unmatched_falls_back() {
        let responder = ChatResponder::default();
        assert_eq!(responder.classify("hello there"), ReplyCategory::General);
        assert_eq!(responder.respond("hello there"), FALLBACK_REPLY);
        assert_eq!(responder.respond(""), FALLBACK_REPLY);
    }
}
