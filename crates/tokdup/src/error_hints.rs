use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("no such file or directory") || haystack.contains("not found") {
        push_hint(&mut out, "Verify the path exists and is readable.");
        push_hint(
            &mut out,
            "Use an absolute path to avoid working-directory confusion.",
        );
    }

    if haystack.contains("failed to create") {
        push_hint(
            &mut out,
            "Check that the directory given to `--output` exists and is writable.",
        );
    }

    if haystack.contains("toml") && (haystack.contains("parse") || haystack.contains("invalid"))
    {
        push_hint(
            &mut out,
            "Check `tokdup.toml` syntax and key names, or regenerate with `tokdup init --force`.",
        );
    }

    if haystack.contains("already exists") {
        push_hint(
            &mut out,
            "Pass `--force` to overwrite, or `--print` to view the template.",
        );
    }

    if haystack.contains("partition mismatch") {
        push_hint(
            &mut out,
            "This is an internal error; please report it together with the input that triggered it.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::{format, suggestions};

    #[test]
    fn suggests_for_missing_path() {
        let err = anyhow!("No such file or directory (os error 2)")
            .context("Failed to load config missing.toml");
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("path exists")));
    }

    #[test]
    fn suggests_for_unwritable_output() {
        let err = anyhow!("Permission denied").context("Failed to create /root/out.txt");
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("--output")));
    }

    #[test]
    fn suggests_for_bad_toml() {
        let err = anyhow!("TOML parse error at line 1, column 5")
            .context("Failed to load config tokdup.toml");
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("tokdup init --force")));
    }

    #[test]
    fn suggests_for_partition_mismatch() {
        let err = anyhow!("cluster partition mismatch: 2 grouped + 1 singletons != 4 samples");
        let hints = suggestions(&err);
        assert_eq!(hints.len(), 1);
        assert!(hints[0].contains("internal error"));
    }

    #[test]
    fn hints_are_deduplicated() {
        let err = anyhow!("not found").context("No such file or directory");
        let hints = suggestions(&err);
        assert_eq!(hints.len(), 2);
    }

    #[test]
    fn format_includes_hints_section() {
        let err = anyhow!("Path not found: no-file");
        let rendered = format(&err);
        assert!(rendered.starts_with("Error:"));
        assert!(rendered.contains("Hints:"));
    }

    #[test]
    fn format_without_hints_is_one_line() {
        let err = anyhow!("something odd");
        assert_eq!(format(&err), "Error: something odd");
    }
}
