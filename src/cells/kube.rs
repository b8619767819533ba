//! Cluster-context cell: best-effort invocation of an external lookup
//! binary. The binary being absent or failing is common and never an
//! operator-actionable fault, so every failure path degrades to an
//! empty contribution.
//!
//! This is the one cell that performs blocking external I/O. There is
//! no timeout: a hung binary stalls the tick it was invoked on.

use std::process::Command;

use crate::constants::KUBE_GLYPH;

/// Run `<binary> config current-context` and return the glyph-prefixed
/// trimmed context name. Unset/unreachable binary, nonzero exit, or
/// empty output all yield None.
pub fn current_context(binary: Option<&str>) -> Option<String> {
    let binary = binary?.trim();
    if binary.is_empty() {
        return None;
    }

    let output = Command::new(binary)
        .args(["config", "current-context"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    // Combined capture: stdout then stderr.
    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    let context = combined.trim();
    if context.is_empty() {
        None
    } else {
        Some(format!("{} {}", KUBE_GLYPH, context))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    /// Write an executable shell script standing in for the lookup
    /// binary.
    fn fake_binary(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("kubectl");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    fn success_yields_glyph_prefixed_trimmed_context() {
        let dir = tempfile::tempdir().unwrap();
        let bin = fake_binary(&dir, "echo 'prod'");
        let got = current_context(Some(bin.to_str().unwrap()));
        assert_eq!(got, Some(format!("{} prod", KUBE_GLYPH)));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let bin = fake_binary(&dir, "printf '  staging  \\n\\n'");
        let got = current_context(Some(bin.to_str().unwrap()));
        assert_eq!(got, Some(format!("{} staging", KUBE_GLYPH)));
    }

    #[test]
    fn nonzero_exit_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let bin = fake_binary(&dir, "echo 'error: no context' >&2; exit 1");
        assert_eq!(current_context(Some(bin.to_str().unwrap())), None);
    }

    #[test]
    fn empty_output_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let bin = fake_binary(&dir, "exit 0");
        assert_eq!(current_context(Some(bin.to_str().unwrap())), None);
    }

    #[test]
    fn unreachable_binary_yields_nothing() {
        assert_eq!(current_context(Some("/nonexistent/kubectl")), None);
    }

    #[test]
    fn unset_or_blank_path_yields_nothing() {
        assert_eq!(current_context(None), None);
        assert_eq!(current_context(Some("   ")), None);
    }
}
