// Upload file name sanitisation

/// Reduce a client-supplied file name to a safe single path component.
///
/// Path separators become spaces, whitespace runs collapse to `_`, and only
/// ASCII letters, digits, `_`, `.` and `-` survive. Leading and trailing
/// `.`/`_` are stripped, so `../../etc/passwd` becomes `etc_passwd`. The
/// result may be empty.
pub fn secure_filename(name: &str) -> String {
    let spaced: String = name
        .chars()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    let filtered: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    filtered.trim_matches(|c| c == '.' || c == '_').to_string()
}
