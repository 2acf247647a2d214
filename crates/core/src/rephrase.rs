//! Turn declarative eligibility statements into yes/no questions

use std::sync::LazyLock;

use crate::rules::{self, Rule};

static QUESTION_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::whole_word("individuals", "Do you")
            .expect("valid individuals pattern")
            .guarded_by("individuals"),
        Rule::whole_word("diagnosis", "Have you been diagnosed with")
            .expect("valid diagnosis pattern")
            .guarded_by("diagnosis"),
        // Case-sensitive, and must stay after the two rules above.
        Rule::new(r"have\s(current|severe)\s", "Do you currently have ", false)
            .expect("valid have-current pattern"),
    ]
});

/// Apply the fixed question rewrites in order
pub fn rephrase_as_question(text: &str) -> String {
    rules::apply_all(QUESTION_RULES.iter(), text)
}
