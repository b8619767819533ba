//! Working-directory display rewriting: home elision plus ordered
//! literal alias rules.

use serde::{Deserialize, Serialize};

use crate::constants::HOME_MARKER;

/// One literal rewrite rule. Rules with an empty pattern or
/// replacement are skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasRule {
    pub pattern: String,
    pub replacement: String,
}

/// Apply alias rules to `path` in order, carrying each result into the
/// next rule. Substitution is a plain substring replace, so regex
/// metacharacters in a pattern match only themselves. With no rules
/// the path is returned unchanged.
pub fn apply_aliases(path: &str, rules: &[AliasRule]) -> String {
    let mut out = path.to_string();
    for rule in rules {
        if rule.pattern.is_empty() || rule.replacement.is_empty() {
            continue;
        }
        out = out.replace(&rule.pattern, &rule.replacement);
    }
    out
}

/// Replace the home-directory prefix with [`HOME_MARKER`]. Runs before
/// alias rules so aliases can match the shortened form.
pub fn elide_home(path: &str, home: &str) -> String {
    if home.is_empty() {
        return path.to_string();
    }
    match path.strip_prefix(home) {
        Some(rest) => format!("{}{}", HOME_MARKER, rest),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(pattern: &str, replacement: &str) -> AliasRule {
        AliasRule {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        }
    }

    // ── apply_aliases ─────────────────────────────────────────────

    #[test]
    fn no_rules_returns_input_unchanged() {
        assert_eq!(apply_aliases("/home/user/dev", &[]), "/home/user/dev");
    }

    #[test]
    fn single_rule_rewrites_prefix() {
        let rules = [rule("/home/user/dev", "🛠️")];
        assert_eq!(apply_aliases("/home/user/dev/project", &rules), "🛠️/project");
    }

    #[test]
    fn rules_apply_sequentially() {
        // The second rule sees the first rule's output.
        let rules = [rule("/home/user", "~"), rule("~/dev", "D")];
        assert_eq!(apply_aliases("/home/user/dev/x", &rules), "D/x");
    }

    #[test]
    fn metacharacters_match_literally() {
        // "." must match only a literal dot, not any character.
        let rules = [rule("a.c", "X")];
        assert_eq!(apply_aliases("abc/a.c", &rules), "abc/X");
    }

    #[test]
    fn incomplete_rules_skipped_silently() {
        let rules = [rule("", "X"), rule("/tmp", ""), rule("/tmp", "T")];
        assert_eq!(apply_aliases("/tmp/x", &rules), "T/x");
    }

    #[test]
    fn replaces_every_occurrence() {
        let rules = [rule("ab", "-")];
        assert_eq!(apply_aliases("ab/ab", &rules), "-/-");
    }

    // ── elide_home ────────────────────────────────────────────────

    #[test]
    fn home_prefix_becomes_marker() {
        assert_eq!(elide_home("/home/user/dev", "/home/user"), "~/dev");
    }

    #[test]
    fn non_home_path_unchanged() {
        assert_eq!(elide_home("/etc/nginx", "/home/user"), "/etc/nginx");
    }

    #[test]
    fn empty_home_is_a_no_op() {
        assert_eq!(elide_home("/etc", ""), "/etc");
    }

    #[test]
    fn elision_then_alias_compose() {
        let shortened = elide_home("/home/user/dev/project", "/home/user");
        let rules = [rule("~/dev", "🛠️")];
        assert_eq!(apply_aliases(&shortened, &rules), "🛠️/project");
    }
}
