//! Integration tests for [`intent_router::IntentClassifier`] over the built-in rule list.
//!
//! Covers: every rule resolving to its handler, the declared priority order as
//! a tie-break contract, verbatim message embedding in task descriptions,
//! case-insensitive matching, and fallback totality.

use chatterly_core::HandlerKind;
use intent_router::catalog::builtin_classifier;

/// **Test: Each rule's keywords resolve to the declared handler.**
///
/// **Setup:** Built-in classifier.
/// **Action:** Classify one representative message per rule.
/// **Expected:** Handler matches the rule's target.
#[test]
fn test_each_rule_resolves_to_its_handler() {
    let classifier = builtin_classifier();
    let cases = [
        ("help me build a study schedule", HandlerKind::Study),
        ("is my assignment graded yet", HandlerKind::Tasks),
        ("I feel burnout coming", HandlerKind::Stress),
        ("give me the definition of osmosis", HandlerKind::Concepts),
        ("please inspire me today", HandlerKind::Motivation),
        ("review my resume please", HandlerKind::Career),
        ("facts about the moon landing", HandlerKind::Knowledge),
        ("I'm bored, let's have some banter", HandlerKind::Social),
    ];
    for (message, expected) in cases {
        let classification = classifier.classify(message);
        assert_eq!(
            classification.handler, expected,
            "message {message:?} routed to {}",
            classification.handler
        );
    }
}

/// **Test: Rule order is the tie-break; earliest declared rule wins.**
///
/// **Setup:** Message matching both the stress rule (3) and the concepts rule (4).
/// **Action:** Classify.
/// **Expected:** Stress, because rule 3 is declared before rule 4.
#[test]
fn test_priority_stress_beats_concepts() {
    let classifier = builtin_classifier();
    let classification = classifier.classify("I'm stressed, can you explain derivatives?");
    assert_eq!(classification.handler, HandlerKind::Stress);
}

/// **Test: A message with both "stressed" (rule 3, earlier in the text) and
/// "deadline" (rule 2) resolves to Tasks: declaration order decides, not the
/// position of the first keyword found in the message.**
#[test]
fn test_priority_is_rule_order_not_keyword_position() {
    let classifier = builtin_classifier();
    let classification = classifier.classify("I'm so stressed about this deadline tomorrow");
    assert_eq!(classification.handler, HandlerKind::Tasks);
}

/// **Test: Study rule matches "plan" and the task description embeds the
/// original message verbatim (original casing preserved).**
#[test]
fn test_task_description_embeds_message_verbatim() {
    let classifier = builtin_classifier();
    let message = "Can you help me make a study plan for finals?";
    let classification = classifier.classify(message);
    assert_eq!(classification.handler, HandlerKind::Study);
    assert!(classification.task_description.ends_with(message));
    assert_eq!(classification.expected_output, "A well-structured study plan.");
}

/// **Test: Matching is case-insensitive (message lowercased once).**
#[test]
fn test_matching_is_case_insensitive() {
    let classifier = builtin_classifier();
    assert_eq!(
        classifier.classify("EXPLAIN entropy to me").handler,
        HandlerKind::Concepts
    );
    assert_eq!(
        classifier.classify("LinkedIn Profile tips").handler,
        HandlerKind::Career
    );
}

/// **Test: Multi-word keyword "feeling low" matches by substring containment.**
#[test]
fn test_multi_word_keyword_matches() {
    let classifier = builtin_classifier();
    assert_eq!(
        classifier.classify("been feeling low all week").handler,
        HandlerKind::Motivation
    );
}

/// **Test: Fallback totality — a message with no rule keywords classifies to
/// General, never an error, with the generalist templates.**
#[test]
fn test_fallback_returns_general() {
    let classifier = builtin_classifier();
    let classification = classifier.classify("greetings earthling!");
    assert_eq!(classification.handler, HandlerKind::General);
    assert!(classification
        .task_description
        .ends_with("greetings earthling!"));
    assert_eq!(
        classification.expected_output,
        "A helpful and versatile response."
    );
}

/// **Test: The built-in rule list is declared in the documented priority
/// order; `rules()` exposes that order for inspection.**
#[test]
fn test_builtin_rule_declaration_order() {
    let classifier = builtin_classifier();
    let order: Vec<HandlerKind> = classifier.rules().iter().map(|r| r.handler).collect();
    assert_eq!(
        order,
        vec![
            HandlerKind::Study,
            HandlerKind::Tasks,
            HandlerKind::Stress,
            HandlerKind::Concepts,
            HandlerKind::Motivation,
            HandlerKind::Career,
            HandlerKind::Knowledge,
            HandlerKind::Social,
        ]
    );
}

/// **Test: Classification is deterministic — same message, same result.**
#[test]
fn test_classification_is_deterministic() {
    let classifier = builtin_classifier();
    let a = classifier.classify("explain entropy");
    let b = classifier.classify("explain entropy");
    assert_eq!(a, b);
}
