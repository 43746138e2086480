/// Turns raw search-bar input into the term sent to the name lookup.
///
/// Blank input yields `None` and must not trigger a request. Otherwise the
/// input is trimmed and capitalised (`pIKACHU` becomes `Pikachu`), which is the
/// casing the API's name lookup expects. Digits pass through unchanged so a
/// pokédex number can be searched as well.
pub fn normalize_query(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    let first = chars.next()?;

    Some(
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    )
}
