//! Scripted CBT-style replies chosen by keyword.
//!
//! Rules are checked top to bottom and the first one whose keywords appear
//! anywhere in the lower-cased message wins, so a message that mentions both
//! stress and sleep always gets the stress reply.

use lazy_static::lazy_static;
use regex::RegexSet;

struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

pub const STRESS_REPLY: &str = "It sounds like you're carrying a heavy load right now. In CBT, we look at how to break large stressors into smaller, manageable pieces. What is ONE small thing you can control right now?";
pub const REST_REPLY: &str = "Being a working mom is incredibly demanding on your nervous system. Your brain needs rest to form new neural pathways (neuroplasticity). Can you find a 10-minute window for yourself today just to breathe?";
pub const FAMILY_REPLY: &str = "Family dynamics can trigger automatic negative thoughts. Let's reframe: Instead of thinking 'I have to do everything perfectly,' try 'I am doing my best, and good enough is perfectly fine.' How does that feel?";
pub const LOW_MOOD_REPLY: &str = "I hear you. It's completely valid to feel that way. What is a small, healthy habit that usually brings you a tiny bit of joy? A hot cup of tea? A short walk?";
pub const FALLBACK_REPLY: &str = "Thank you for sharing that with me. What specific thought crossed your mind just before you started feeling this way?";

const RULES: [Rule; 4] = [
    Rule {
        keywords: &["stress", "overwhelm", "too much", "busy"],
        reply: STRESS_REPLY,
    },
    Rule {
        keywords: &["tired", "exhausted", "sleep"],
        reply: REST_REPLY,
    },
    Rule {
        keywords: &["kid", "child", "husband", "family"],
        reply: FAMILY_REPLY,
    },
    Rule {
        keywords: &["sad", "depressed", "down"],
        reply: LOW_MOOD_REPLY,
    },
];

lazy_static! {
    // one pattern per rule, same index as RULES
    static ref MATCHERS: RegexSet = RegexSet::new(RULES.iter().map(|rule| {
        rule.keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|")
    }))
    .unwrap();
}

pub fn respond(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    MATCHERS
        .matches(&lowered)
        .iter()
        .next()
        .map(|idx| RULES[idx].reply)
        .unwrap_or(FALLBACK_REPLY)
}
