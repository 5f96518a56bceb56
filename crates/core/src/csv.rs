//! Minimal CSV rendering for downloadable exports.

/// Render a header row followed by data rows. Lines are joined with `\n`.
pub fn build_csv<I>(header: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut lines = vec![header
        .iter()
        .map(|h| csv_escape(h))
        .collect::<Vec<_>>()
        .join(",")];

    for row in rows {
        let escaped: Vec<String> = row.iter().map(|v| csv_escape(v)).collect();
        lines.push(escaped.join(","));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Quote a field if it contains a delimiter, quote, or line break.
pub fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r')
    {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render an optional value as a CSV field; `None` becomes an empty field.
pub fn optional_field<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
