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

    if haystack.contains("no such file or directory")
        || haystack.contains("cannot find the file")
    {
        push_hint(&mut out, "Verify the input path exists and is readable.");
        push_hint(
            &mut out,
            "Use an absolute path to avoid working-directory confusion.",
        );
    }

    if haystack.contains("missing value") {
        push_hint(
            &mut out,
            "Each line needs `name<delimiter>value`; pick the delimiter with `--delimiter`.",
        );
        push_hint(&mut out, "Tab-separated files take `--delimiter tab`.");
    }

    if haystack.contains("is not an integer") {
        push_hint(
            &mut out,
            "Values must be whole numbers; check for a header row or a stray delimiter.",
        );
        push_hint(&mut out, "Prefix header or note lines with `#` to skip them.");
    }

    if haystack.contains("invalid record at index") {
        push_hint(
            &mut out,
            "Names must be non-empty and values must not be negative.",
        );
    }

    if haystack.contains("unknown profile") {
        push_hint(
            &mut out,
            "Define the profile under `[profiles.<name>]` in `soundalike.toml`, or drop `--profile`.",
        );
    }

    if haystack.contains("toml") && (haystack.contains("parse") || haystack.contains("invalid")) {
        push_hint(&mut out, "Check `soundalike.toml` syntax and key names.");
    }

    if haystack.contains("invalid delimiter") {
        push_hint(
            &mut out,
            "Pass a single character such as `,` or `;`, or `tab` for tab-separated input.",
        );
    }

    if haystack.contains("no input file given") {
        push_hint(&mut out, "Usage: `soundalike <INPUT>`; see `soundalike --help`.");
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
