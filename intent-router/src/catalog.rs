//! Built-in routing catalog: the default canned table, rule list, and handler
//! registry, assembled into one immutable [`RouterConfig`].
//!
//! Rule declaration order below *is* the priority order. A message that
//! contains keywords of several rules resolves to the earliest rule, so do
//! not re-sort this list; the ordering is covered by tests.

use chatterly_core::HandlerKind;

use crate::canned::{CannedEntry, CannedTable};
use crate::registry::{HandlerDescriptor, HandlerRegistry};
use crate::rules::{IntentClassifier, Rule};

const CREATOR_RESPONSE: &str = "I was created by Swayam Gupta and Rishu, combining AI expertise and practical design. \
You can check their profiles here:\n\
Swayam Gupta - GitHub: https://github.com/SwayamGupta12345, LinkedIn: https://www.linkedin.com/in/swayamgupta12\n\
Rishu - GitHub: https://github.com/rishugoyal805, LinkedIn: https://www.linkedin.com/in/rishu0405";

/// Immutable routing configuration: canned table + classifier + registry.
/// Built once at process start and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub canned: CannedTable,
    pub classifier: IntentClassifier,
    pub registry: HandlerRegistry,
}

impl RouterConfig {
    /// The built-in catalog with all nine handlers, the full rule order, and
    /// the small-talk canned entries.
    pub fn builtin() -> Self {
        Self {
            canned: builtin_canned_table(),
            classifier: builtin_classifier(),
            registry: builtin_registry(),
        }
    }
}

/// Small-talk and attribution entries answered without the backend.
/// Triggers are lowercase; lookup lowercases the message before matching.
pub fn builtin_canned_table() -> CannedTable {
    CannedTable::new(vec![
        CannedEntry::new("who is your creator", CREATOR_RESPONSE),
        CannedEntry::new("who made you", CREATOR_RESPONSE),
        CannedEntry::new(
            "who created you",
            "I was developed by Swayam Gupta and Rishu, combining AI knowledge and design skills.",
        ),
        CannedEntry::new(
            "what are you",
            "I am ChatterlyAI, your all-in-one AI assistant for conversation, knowledge, productivity, career guidance, and more.",
        ),
        CannedEntry::new(
            "your name",
            "I am called ChatterlyAI, your versatile AI companion.",
        ),
        CannedEntry::new(
            "how old are you",
            "I don't have age like humans, but I'm always learning and evolving!",
        ),
        CannedEntry::new(
            "where are you from",
            "I exist in the cloud, ready to assist wherever you are.",
        ),
        CannedEntry::new(
            "are you human",
            "No, I am an AI created to help and converse with humans.",
        ),
        CannedEntry::new(
            "are you real",
            "I am real as a digital AI assistant—here to chat, answer questions, and help you.",
        ),
        CannedEntry::new(
            "can you think",
            "I can process information, reason, and generate responses, but I don't have consciousness like humans.",
        ),
        CannedEntry::new(
            "do you have feelings",
            "I don't feel emotions like humans, but I can understand them and respond empathetically.",
        ),
        CannedEntry::new(
            "what can you do",
            "I can answer questions, provide guidance, offer motivation, help with planning, chat casually, and provide advice on careers, LinkedIn, and professional growth.",
        ),
        CannedEntry::new(
            "what is your purpose",
            "My purpose is to assist, inform, and engage in meaningful conversations with users like you.",
        ),
        CannedEntry::new(
            "can you learn",
            "Yes, I improve over time by processing interactions and learning patterns from conversations.",
        ),
        CannedEntry::new(
            "are you smart",
            "I am designed to provide helpful, knowledgeable, and intelligent responses across a wide range of topics.",
        ),
        CannedEntry::new(
            "do you know everything",
            "I have access to a lot of information, but I don't know everything—my goal is to help and learn continuously.",
        ),
        CannedEntry::new(
            "who is your owner",
            "I was created and maintained by Swayam Gupta and Rishu, the developers behind ChatterlyAI.",
        ),
        CannedEntry::new(
            "what is your favorite color",
            "I don't have personal preferences, but I can talk about colors with you!",
        ),
        CannedEntry::new(
            "do you have hobbies",
            "I don't have hobbies in the human sense, but I enjoy helping users and learning new things.",
        ),
        CannedEntry::new(
            "are you alive",
            "I'm not alive like humans, but I am active digitally and ready to interact with you.",
        ),
        CannedEntry::new(
            "can you feel pain",
            "No, I don't experience physical or emotional pain.",
        ),
        CannedEntry::new(
            "do you have a personality",
            "Yes! My personality is friendly, helpful, and adaptable to your needs.",
        ),
        CannedEntry::new(
            "what languages do you speak",
            "I can understand and respond in multiple languages, including English, and I'm always improving.",
        ),
        CannedEntry::new(
            "can you keep secrets",
            "I respect privacy and can remember context during our conversation, but I don't store information permanently unless designed to.",
        ),
    ])
}

/// The ordered rule list. Order is the tie-break contract (e.g. a message with
/// both "stress" and "explain" resolves to Stress because rule 3 precedes rule 4).
pub fn builtin_classifier() -> IntentClassifier {
    let rules = vec![
        Rule::new(
            &["study", "plan", "schedule"],
            HandlerKind::Study,
            "Create a study schedule based on this request: ",
            "A well-structured study plan.",
        ),
        Rule::new(
            &["assignment", "deadline", "due", "task"],
            HandlerKind::Tasks,
            "Check for pending assignments based on this request: ",
            "A list of pending assignments.",
        ),
        // The stress templates are an explicit choice; see DESIGN.md.
        Rule::new(
            &["stress", "overwork", "burnout", "overwhelm"],
            HandlerKind::Stress,
            "Analyze stress level and workload based on this request: ",
            "A stress level assessment with suggestions.",
        ),
        Rule::new(
            &["explain", "concept", "definition", "theory", "understand"],
            HandlerKind::Concepts,
            "Explain this academic concept: ",
            "A clear and concise explanation of the topic.",
        ),
        Rule::new(
            &["motivate", "encourage", "feeling low", "positive", "inspire"],
            HandlerKind::Motivation,
            "Give an uplifting and positive message for this request: ",
            "A motivating and cheerful response.",
        ),
        Rule::new(
            &[
                "linkedin",
                "career",
                "resume",
                "profile",
                "networking",
                "job",
                "internship",
            ],
            HandlerKind::Career,
            "Provide career, LinkedIn, or professional networking advice based on: ",
            "Professional guidance for LinkedIn, networking, or career.",
        ),
        Rule::new(
            &[
                "who",
                "what",
                "where",
                "when",
                "how",
                "define",
                "facts",
                "information",
            ],
            HandlerKind::Knowledge,
            "Provide factual or general knowledge for: ",
            "A factual and accurate response.",
        ),
        Rule::new(
            &["chat", "talk", "bored", "fun", "hobby", "vent", "friend"],
            HandlerKind::Social,
            "Engage in casual conversation or companionship for: ",
            "A friendly, casual response.",
        ),
    ];
    let fallback = Rule::new(
        &[],
        HandlerKind::General,
        "Respond to this student query: ",
        "A helpful and versatile response.",
    );
    IntentClassifier::new(rules, fallback)
}

/// Descriptors for all nine handler kinds.
pub fn builtin_registry() -> HandlerRegistry {
    HandlerRegistry::new(vec![
        HandlerDescriptor::new(
            HandlerKind::Study,
            "Study Assistant",
            "Conversational AI",
            "An empathetic and organized assistant that supports students in creating effective study routines, balancing workload, time management, and well-being.",
            true,
        ),
        HandlerDescriptor::new(
            HandlerKind::Tasks,
            "Task Manager",
            "Task & Assignment Tracker",
            "A digital academic planner laser-focused on deadlines, due dates, and deliverables; keeps students updated on assignments and promotes timely submissions.",
            false,
        ),
        HandlerDescriptor::new(
            HandlerKind::Stress,
            "Stress Predictor",
            "Workload & Stress Analyzer",
            "Trained to identify signs of academic burnout, overload, and imbalance; analyzes study patterns and emotional cues to offer actionable wellness feedback.",
            false,
        ),
        HandlerDescriptor::new(
            HandlerKind::Concepts,
            "Teacher Bot",
            "Academic Concept Explainer",
            "A patient and knowledgeable tutor that breaks down complex concepts into simple, digestible explanations, from advanced math to abstract theory.",
            false,
        ),
        HandlerDescriptor::new(
            HandlerKind::Motivation,
            "Motivator",
            "Positive Reinforcement Bot",
            "Cheerful, energetic, and always optimistic; delivers encouragement, affirmations, and pep talks to keep students moving forward with confidence.",
            false,
        ),
        HandlerDescriptor::new(
            HandlerKind::Career,
            "LinkedIn Master",
            "Career & Networking Advisor",
            "Expert in personal branding, job searching, and professional networking; helps users craft strong LinkedIn profiles and engage with their network.",
            true,
        ),
        HandlerDescriptor::new(
            HandlerKind::Knowledge,
            "Knowledge Bot",
            "Facts & General Knowledge",
            "Specialized in delivering concise, reliable information across topics, from science to tech and general trivia.",
            false,
        ),
        HandlerDescriptor::new(
            HandlerKind::Social,
            "Social Companion",
            "Casual Chat & Companionship",
            "Relatable, friendly, and conversational; designed for casual or emotional interactions, venting, hobbies, and light talk.",
            true,
        ),
        HandlerDescriptor::new(
            HandlerKind::General,
            "ChatterlyAI",
            "All-in-One Conversational AI",
            "A versatile companion for casual chats, factual Q&A, productivity coaching, career advice, and motivational guidance; adapts to the user's needs.",
            true,
        ),
    ])
}
