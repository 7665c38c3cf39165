//! Prompt text sent to the generative service. Every prompt asks for a JSON
//! object so the reply can be decoded into a typed response.

use crate::modification::Modification;

pub fn modify(text: &str, step: &Modification) -> String {
    let mut prompt = String::from(
        "You are an expert text editor. Your task is to modify the provided text based on the user's request.\n\n",
    );
    prompt.push_str(&format!("Modification type: {}\n", step.kind.tag()));
    if let Some(length) = &step.length {
        prompt.push_str(&format!("Desired length: {length}\n"));
    }
    prompt.push_str("\nPerform the requested modification on the following text.\n");
    prompt.push_str("Respond with a JSON object of the form {\"text\": \"<modified text>\"}.\n\n");
    prompt.push_str("Text:\n");
    prompt.push_str(text);
    prompt
}

pub fn summarize(text: &str) -> String {
    format!(
        "Summarize the following text in a concise format.\n\
         Respond with a JSON object of the form {{\"summary\": \"<summary>\"}}.\n\n{text}"
    )
}

/// Writing tests run by [`check`].
pub const QUALITY_TESTS: [(&str, &str); 5] = [
    (
        "Passive Voice Usage",
        "The text should use active voice primarily. If more than 10% of sentences are in passive voice, the test fails.",
    ),
    (
        "Sentence Variety",
        "The text should have a good mix of sentence lengths. If all sentences are very long or all are very short, the test fails.",
    ),
    (
        "Clarity and Conciseness",
        "The text should be clear and to the point. If it contains excessive jargon, wordiness, or convoluted phrasing, the test fails.",
    ),
    (
        "Run-on Sentences",
        "The text should not contain run-on sentences. If any are found, the test fails.",
    ),
    (
        "Spelling and Grammar",
        "The text should be free of obvious spelling and grammar errors. If significant errors are found, the test fails.",
    ),
];

pub fn check(text: &str) -> String {
    let mut prompt = String::from(
        "You are a writing quality assurance expert. Your task is to analyze the following text and \
         evaluate it against a series of common writing tests. For each test, you must determine if the \
         text passes or fails and provide brief, constructive feedback.\n\nHere are the tests to perform:\n",
    );
    for (i, (name, rule)) in QUALITY_TESTS.iter().enumerate() {
        prompt.push_str(&format!("{}. **{name}**: {rule}\n", i + 1));
    }
    prompt.push_str(
        "\nRespond with a JSON object of the form \
         {\"tests\": [{\"name\": \"<test name>\", \"passed\": true, \"feedback\": \"<feedback>\"}]}.\n\n",
    );
    prompt.push_str("Text:\n");
    prompt.push_str(text);
    prompt
}
