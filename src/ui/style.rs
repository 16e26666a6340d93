use console::style;
use std::fmt::Display;

/// Green bold: correct answers, wins
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// Yellow: hints such as "too low"
pub fn warning<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Red bold: failed chat turns, wrong answers
pub fn error<D: Display>(text: D) -> String {
    style(text).red().bold().to_string()
}

/// White bold: screen titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: subtitles, command hints
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Cyan bold: question numbers
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Yellow bold: Mr. Quack's name in the transcript
pub fn duck<D: Display>(text: D) -> String {
    style(text).yellow().bold().to_string()
}

/// Cyan: the user's name in the transcript
pub fn user<D: Display>(text: D) -> String {
    style(text).cyan().to_string()
}
