//! Routing helpers for vehicle identifiers taken from request paths.

/// Extract the vehicle identifier from a path segment.
///
/// The legacy URL form writes a literal `:` before the identifier
/// (`/vehicles/:1234`). One leading colon is removed; everything else is
/// passed through verbatim.
///
/// ```
/// # use vgw_core::routing::vehicle_id_from_path;
/// assert_eq!(vehicle_id_from_path(":1234"), "1234");
/// assert_eq!(vehicle_id_from_path("1234"), "1234");
/// ```
pub fn vehicle_id_from_path(segment: &str) -> &str {
    segment.strip_prefix(':').unwrap_or(segment)
}
