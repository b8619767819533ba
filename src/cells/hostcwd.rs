//! Hostname and working-directory cells. Both read the same host
//! descriptor, fetched once per tick by the orchestrator; each is
//! independently toggleable.

use crate::alias::{apply_aliases, elide_home};
use crate::config::CwdCellConfig;
use crate::models::CwdDescriptor;

/// Hostname from the descriptor's host field, falling back to the
/// local machine's hostname when the field is empty. Only the first
/// dot-separated label is shown.
pub fn hostname_text(desc: &CwdDescriptor, local: Option<&str>) -> Option<String> {
    match desc {
        CwdDescriptor::Legacy(_) => None,
        CwdDescriptor::Uri { host, .. } => {
            let name = if host.is_empty() {
                local?.to_string()
            } else {
                host.clone()
            };
            name.split('.').next().map(str::to_string)
        }
    }
}

/// Working directory from the descriptor's path field, run through
/// home elision (when enabled) and the alias rules.
pub fn cwd_text(desc: &CwdDescriptor, cfg: &CwdCellConfig, home: &str) -> Option<String> {
    match desc {
        CwdDescriptor::Legacy(_) => None,
        CwdDescriptor::Uri { path, .. } => {
            let shown = if cfg.elide_home {
                elide_home(path, home)
            } else {
                path.clone()
            };
            Some(apply_aliases(&shown, &cfg.aliases))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasRule;

    fn uri(host: &str, path: &str) -> CwdDescriptor {
        CwdDescriptor::Uri {
            host: host.to_string(),
            path: path.to_string(),
        }
    }

    // ── hostname_text ─────────────────────────────────────────────

    #[test]
    fn hostname_from_descriptor() {
        assert_eq!(
            hostname_text(&uri("box", "/x"), Some("local")),
            Some("box".to_string())
        );
    }

    #[test]
    fn hostname_strips_domain() {
        assert_eq!(
            hostname_text(&uri("box.example.com", "/x"), None),
            Some("box".to_string())
        );
    }

    #[test]
    fn empty_host_falls_back_to_local() {
        assert_eq!(
            hostname_text(&uri("", "/x"), Some("local")),
            Some("local".to_string())
        );
        assert_eq!(hostname_text(&uri("", "/x"), None), None);
    }

    #[test]
    fn legacy_descriptor_emits_nothing() {
        let legacy = CwdDescriptor::Legacy("/somewhere".to_string());
        assert_eq!(hostname_text(&legacy, Some("local")), None);
    }

    // ── cwd_text ──────────────────────────────────────────────────

    #[test]
    fn cwd_applies_elision_then_aliases() {
        let cfg = CwdCellConfig {
            enabled: true,
            elide_home: true,
            aliases: vec![AliasRule {
                pattern: "~/dev".to_string(),
                replacement: "🛠️".to_string(),
            }],
        };
        assert_eq!(
            cwd_text(&uri("box", "/home/user/dev/project"), &cfg, "/home/user"),
            Some("🛠️/project".to_string())
        );
    }

    #[test]
    fn cwd_without_elision_keeps_full_path() {
        let cfg = CwdCellConfig {
            elide_home: false,
            ..CwdCellConfig::default()
        };
        assert_eq!(
            cwd_text(&uri("box", "/home/user/x"), &cfg, "/home/user"),
            Some("/home/user/x".to_string())
        );
    }

    #[test]
    fn legacy_descriptor_has_no_cwd() {
        let legacy = CwdDescriptor::Legacy("/somewhere".to_string());
        assert_eq!(cwd_text(&legacy, &CwdCellConfig::default(), "/h"), None);
    }
}
