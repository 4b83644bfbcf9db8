use combo_filter_engine::filters::FilterId;

/// Accepts a catalogue identifier (`excludeSameOnesDigit`) or its kebab-case
/// name (`same-ones-digit`).
pub fn parse_filter(s: &str) -> Result<FilterId, String> {
    s.parse::<FilterId>()
        .map_err(|e| format!("{e} (see --list-filters for accepted names)"))
}

/// Limit values accept `_` separators, e.g. `10_000_000`.
pub fn parse_limit(s: &str) -> Result<u64, String> {
    let cleaned = s.trim().replace('_', "");
    cleaned
        .parse::<u64>()
        .map_err(|_| format!("Invalid combination limit: {s}"))
}
