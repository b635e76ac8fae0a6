use crate::error::Result;
use crate::version::Version;
use regex::Regex;

/// Outcome of patching one piece of source text.
#[derive(Debug, Clone)]
pub struct PatchResult {
    /// Full rewritten text, identical to the input when nothing changed.
    pub text: String,
    /// Number of directive occurrences rewritten.
    pub updated: usize,
    /// Raw version strings of every directive found, in order of appearance.
    pub versions: Vec<String>,
}

impl PatchResult {
    pub fn has_directives(&self) -> bool {
        !self.versions.is_empty()
    }
}

/// Rewrites `cmake_minimum_required(VERSION ...)` directives that sit
/// below a target version, leaving compliant directives untouched.
pub struct DirectivePatcher {
    pattern: Regex,
    target: Version,
}

impl DirectivePatcher {
    pub fn new(target_version: &str) -> Result<Self> {
        // Three groups: prefix up to the version token, the dotted
        // version itself, and the argument tail before the closing `)`.
        let pattern = Regex::new(
            r"(?i)(cmake_minimum_required\s*\(\s*VERSION\s+)([0-9][0-9.]*)([^)]*)",
        )?;

        Ok(Self {
            pattern,
            target: Version::parse(target_version)?,
        })
    }

    /// Apply the target version to every directive below it.
    ///
    /// Output is assembled in a single pass over the original text, so
    /// one rewrite never shifts the offsets of the matches after it.
    pub fn patch(&self, text: &str) -> Result<PatchResult> {
        let mut output = String::with_capacity(text.len());
        let mut versions = Vec::new();
        let mut updated = 0;
        let mut tail_start = 0;

        for captures in self.pattern.captures_iter(text) {
            let Some(found) = captures.get(2) else {
                continue;
            };

            versions.push(found.as_str().to_string());

            if Version::parse(found.as_str())? < self.target {
                output.push_str(&text[tail_start..found.start()]);
                output.push_str(&self.target.original);
                updated += 1;
            } else {
                output.push_str(&text[tail_start..found.end()]);
            }
            tail_start = found.end();
        }

        output.push_str(&text[tail_start..]);

        Ok(PatchResult {
            text: output,
            updated,
            versions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patcher() -> DirectivePatcher {
        DirectivePatcher::new("3.18").unwrap()
    }

    #[test]
    fn rewrites_version_below_target() {
        let result = patcher()
            .patch("cmake_minimum_required(VERSION 3.1)\nproject(demo)\n")
            .unwrap();

        assert_eq!(result.text, "cmake_minimum_required(VERSION 3.18)\nproject(demo)\n");
        assert_eq!(result.updated, 1);
        assert_eq!(result.versions, vec!["3.1"]);
    }

    #[test]
    fn compliant_text_passes_through_byte_identical() {
        let input = "cmake_minimum_required(VERSION 3.20)\nproject(demo)\n";
        let result = patcher().patch(input).unwrap();

        assert_eq!(result.text, input);
        assert_eq!(result.updated, 0);
        assert_eq!(result.versions, vec!["3.20"]);
    }

    #[test]
    fn equal_version_is_not_rewritten() {
        let input = "cmake_minimum_required(VERSION 3.18)\n";
        let result = patcher().patch(input).unwrap();

        assert_eq!(result.text, input);
        assert_eq!(result.updated, 0);
    }

    #[test]
    fn preserves_trailing_arguments() {
        let result = patcher()
            .patch("cmake_minimum_required(VERSION 3.1 FATAL_ERROR)\n")
            .unwrap();

        assert_eq!(result.text, "cmake_minimum_required(VERSION 3.18 FATAL_ERROR)\n");
    }

    #[test]
    fn matches_case_insensitively_and_preserves_prefix_casing() {
        let result = patcher()
            .patch("CMAKE_MINIMUM_REQUIRED(version 3.5)\n")
            .unwrap();

        assert_eq!(result.text, "CMAKE_MINIMUM_REQUIRED(version 3.18)\n");
        assert_eq!(result.updated, 1);
    }

    #[test]
    fn preserves_directive_spacing() {
        let result = patcher()
            .patch("cmake_minimum_required ( VERSION  3.5 )\n")
            .unwrap();

        assert_eq!(result.text, "cmake_minimum_required ( VERSION  3.18 )\n");
    }

    #[test]
    fn evaluates_multiple_directives_independently() {
        let input = "cmake_minimum_required(VERSION 3.1)\n\
                     add_subdirectory(vendor)\n\
                     cmake_minimum_required(VERSION 3.20)\n";
        let result = patcher().patch(input).unwrap();

        assert_eq!(result.updated, 1);
        assert_eq!(result.versions, vec!["3.1", "3.20"]);
        assert!(result.text.contains("cmake_minimum_required(VERSION 3.18)"));
        assert!(result.text.contains("cmake_minimum_required(VERSION 3.20)"));
    }

    #[test]
    fn patching_is_idempotent() {
        let first = patcher()
            .patch("cmake_minimum_required(VERSION 3.1 FATAL_ERROR)\n")
            .unwrap();
        let second = patcher().patch(&first.text).unwrap();

        assert_eq!(second.updated, 0);
        assert_eq!(second.text, first.text);
    }

    #[test]
    fn text_without_directive_reports_none() {
        let input = "project(demo)\nadd_library(demo demo.c)\n";
        let result = patcher().patch(input).unwrap();

        assert!(!result.has_directives());
        assert_eq!(result.text, input);
        assert_eq!(result.updated, 0);
    }

    #[test]
    fn never_downgrades() {
        let result = DirectivePatcher::new("3.10")
            .unwrap()
            .patch("cmake_minimum_required(VERSION 3.18)\n")
            .unwrap();

        assert_eq!(result.updated, 0);
        assert_eq!(result.text, "cmake_minimum_required(VERSION 3.18)\n");
    }
}
