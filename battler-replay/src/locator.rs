use crate::ReplayError;

/// Extracts a replay ID from a replay locator.
///
/// The locator can be a bare replay ID (`gen9ou-12345`) or a replay URL
/// (`https://replay.pokemonshowdown.com/gen9ou-12345?p2`). A trailing `.json` or `.log` extension
/// is dropped.
pub fn replay_id(locator: &str) -> Result<String, ReplayError> {
    let path = locator
        .trim()
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    // Drop the scheme and host of a URL.
    let path = match path.split_once("://") {
        Some((_, rest)) => rest.split_once('/').map(|(_, path)| path).unwrap_or_default(),
        None => path,
    };
    let id = path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    let id = id
        .strip_suffix(".json")
        .or_else(|| id.strip_suffix(".log"))
        .unwrap_or(id);
    if id.is_empty() {
        return Err(ReplayError::InvalidLocator(locator.to_owned()));
    }
    Ok(id.to_owned())
}
