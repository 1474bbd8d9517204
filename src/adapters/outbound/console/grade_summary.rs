use crate::package_scoring::domain::Grade;
use owo_colors::OwoColorize;

/// One-line score summary printed to stderr after rendering
///
/// Colours follow the grade: A/B green, C yellow, D/E red.
pub fn format_grade_summary(package: &str, total_score: i64, grade: Grade, use_colors: bool) -> String {
    let label = format!("grade {}", grade);
    let label = if use_colors {
        match grade {
            Grade::A | Grade::B => label.green().bold().to_string(),
            Grade::C => label.yellow().bold().to_string(),
            Grade::D | Grade::E => label.red().bold().to_string(),
        }
    } else {
        label
    };

    format!("🏁 {}: score {}, {}", package, total_score, label)
}

/// Colour only when stderr is a terminal
pub fn should_use_colors() -> bool {
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
