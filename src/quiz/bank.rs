//! Question bank
//!
//! Every topic yields exactly [`QUESTIONS_PER_TOPIC`] questions. The frog
//! topic has a curated biology set; any other topic gets templated prompts.

use crate::models::QuizQuestion;

/// Number of questions generated for any topic
pub const QUESTIONS_PER_TOPIC: usize = 5;

const CURATED_TOPIC: &str = "frog";

const FROG_QUESTIONS: [(&str, &str); QUESTIONS_PER_TOPIC] = [
    ("What is the phylum of the frog?", "Chordata"),
    ("What class do frogs belong to?", "Amphibia"),
    ("What is the primary habitat of frogs?", "Wetlands"),
    ("What type of fertilization do frogs have?", "External"),
    ("Do frogs have a backbone?", "Yes"),
];

/// Generate the question set for a topic.
///
/// Pure: the same topic always yields an identical sequence. Topic matching
/// ignores case and surrounding whitespace.
pub fn generate(topic: &str) -> Vec<QuizQuestion> {
    let topic = topic.trim();
    if topic.eq_ignore_ascii_case(CURATED_TOPIC) {
        return FROG_QUESTIONS
            .iter()
            .map(|(prompt, answer)| QuizQuestion::new(*prompt, *answer))
            .collect();
    }

    vec![
        QuizQuestion::new(
            format!("What is the basic concept of {}?", topic),
            "Concept Answer",
        ),
        QuizQuestion::new(
            format!("Explain one key element of {}?", topic),
            "Key Element Answer",
        ),
        QuizQuestion::new(
            format!("How does {} relate to other fields?", topic),
            "Relation Answer",
        ),
        QuizQuestion::new(
            format!("What is the future scope of {}?", topic),
            "Future Scope Answer",
        ),
        QuizQuestion::new(
            format!("Name an important application of {}.", topic),
            "Application Answer",
        ),
    ]
}
