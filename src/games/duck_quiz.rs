use super::quiz::QuizQuestion;
use crate::error::GameError;

const DUCK_QUESTIONS: [(&str, [&str; 4], &str); 4] = [
    (
        "What do ducks have on their feet?",
        ["Claws", "Webbed feet", "Hooves", "Scales"],
        "Webbed feet",
    ),
    (
        "What sound do ducks make?",
        ["Moo", "Quack", "Baa", "Woof"],
        "Quack",
    ),
    (
        "Where do most ducks like to live?",
        ["Deserts", "Lakes and rivers", "Mountains", "Caves"],
        "Lakes and rivers",
    ),
    (
        "What do ducks often eat?",
        ["Grass and insects", "Metal", "Plastic", "Rocks"],
        "Grass and insects",
    ),
];

/// The built-in duck quiz.
pub fn duck_questions() -> Result<Vec<QuizQuestion>, GameError> {
    DUCK_QUESTIONS
        .iter()
        .map(|(question, options, answer)| {
            QuizQuestion::new(
                *question,
                options.iter().map(|o| (*o).to_string()).collect(),
                *answer,
            )
        })
        .collect()
}
