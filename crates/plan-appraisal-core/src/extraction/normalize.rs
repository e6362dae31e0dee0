/// Collapse a raw paragraph-structured document into a clean line-joined
/// blob: every line trimmed, blank lines dropped, original order preserved.
/// The field patterns rely on label order and proximity, so nothing is
/// reordered or deduplicated.
pub fn normalize(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
