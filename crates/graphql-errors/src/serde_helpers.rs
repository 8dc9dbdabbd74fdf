use crate::ExtensionValue;
use crate::Location;
use serde::Deserialize;
use serde::Deserializer;

/// Deserializes a field whose explicit `null` should be treated the same as
/// the field being absent.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes an error entry's `locations` without letting a single
/// malformed location fail the whole entry.
///
/// Locations that cannot be read as a line/column pair are skipped (and
/// logged); every other location is kept in server order.
pub(crate) fn lenient_locations<'de, D>(
    deserializer: D,
) -> Result<Vec<Location>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw_locations: Vec<ExtensionValue> = null_as_default(deserializer)?;
    Ok(raw_locations
        .iter()
        .filter_map(|raw| {
            let location = Location::from_extension_value(raw);
            if location.is_none() {
                log::debug!("Skipping malformed GraphQL error location: {raw:?}");
            }
            location
        })
        .collect())
}
