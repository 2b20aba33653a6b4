/// Parses `--delimiter`: one ASCII character, or `tab` / `\t`.
pub fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => return Ok(b'\t'),
        _ => {}
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        (Some(c), None) => Err(format!("delimiter must be an ASCII character, got '{c}'")),
        (None, _) => Err("delimiter must not be empty".to_string()),
        _ => Err(format!("delimiter must be a single character, got '{s}'")),
    }
}
