//! Path derivation
//!
//! Every path the scaffolder touches is a pure function of
//! `(day_number, year)`, relative to the project root the tool runs in.

use std::path::PathBuf;

use crate::consts::{DAY_PACKAGE_TEMPLATE, DAY_TOKEN, PACKAGE_ROOT_TEMPLATE, YEAR_TOKEN};

/// Expand the placeholder tokens in a path template.
pub(crate) fn expand_tokens(template: &str, day_number: u32, year: i32) -> String {
    template
        .replace(DAY_TOKEN, &day_number.to_string())
        .replace(YEAR_TOKEN, &year.to_string())
}

/// All input and output paths for one scaffolded day.
#[derive(Debug)]
pub(crate) struct DayPaths {
    /// Empty puzzle input under main resources
    pub(crate) puzzle_input: PathBuf,
    /// Empty sample input under test resources
    pub(crate) sample_input: PathBuf,
    pub(crate) solution_template: PathBuf,
    pub(crate) solution: PathBuf,
    pub(crate) test_template: PathBuf,
    pub(crate) test: PathBuf,
}

impl DayPaths {
    pub(crate) fn derive(day_number: u32, year: i32) -> Self {
        let package_root = expand_tokens(PACKAGE_ROOT_TEMPLATE, day_number, year);
        let day_package = expand_tokens(DAY_PACKAGE_TEMPLATE, day_number, year);

        DayPaths {
            puzzle_input: PathBuf::from(format!("src/main/resources/day{day_number}/p1_input.txt")),
            sample_input: PathBuf::from(format!(
                "src/test/resources/day{day_number}/p1_sample.txt"
            )),
            solution_template: PathBuf::from(format!(
                "src/main/kotlin/{package_root}/template/TemplateSolution.kt"
            )),
            solution: PathBuf::from(format!(
                "src/main/kotlin/{day_package}/Day{day_number}Solution.kt"
            )),
            test_template: PathBuf::from(format!(
                "src/test/kotlin/{package_root}/template/TemplateSolutionTest.kt"
            )),
            test: PathBuf::from(format!(
                "src/test/kotlin/{day_package}/Day{day_number}SolutionTest.kt"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_tokens_replaces_every_occurrence() {
        assert_eq!(
            expand_tokens("y{{year}}/d{{day_number}}/{{day_number}}", 7, 2023),
            "y2023/d7/7"
        );
    }

    #[test]
    fn expand_tokens_leaves_other_text_alone() {
        assert_eq!(expand_tokens("src/main/kotlin", 1, 2023), "src/main/kotlin");
    }

    #[test]
    fn derive_day_5_year_2023() {
        let paths = DayPaths::derive(5, 2023);
        assert_eq!(
            paths.puzzle_input,
            PathBuf::from("src/main/resources/day5/p1_input.txt")
        );
        assert_eq!(
            paths.sample_input,
            PathBuf::from("src/test/resources/day5/p1_sample.txt")
        );
        assert_eq!(
            paths.solution_template,
            PathBuf::from("src/main/kotlin/net/navatwo/adventofcode2023/template/TemplateSolution.kt")
        );
        assert_eq!(
            paths.solution,
            PathBuf::from("src/main/kotlin/net/navatwo/adventofcode2023/day5/Day5Solution.kt")
        );
        assert_eq!(
            paths.test_template,
            PathBuf::from("src/test/kotlin/net/navatwo/adventofcode2023/template/TemplateSolutionTest.kt")
        );
        assert_eq!(
            paths.test,
            PathBuf::from("src/test/kotlin/net/navatwo/adventofcode2023/day5/Day5SolutionTest.kt")
        );
    }

    #[test]
    fn derive_uses_the_given_year() {
        let paths = DayPaths::derive(1, 2021);
        assert_eq!(
            paths.solution,
            PathBuf::from("src/main/kotlin/net/navatwo/adventofcode2021/day1/Day1Solution.kt")
        );
    }
}
