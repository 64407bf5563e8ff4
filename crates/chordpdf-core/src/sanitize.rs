//! Path-component-safe names for keys and chords.
//!
//! Chord names legitimately contain `/` (slash chords such as "C/G"), which
//! would otherwise be read as a directory separator when building output paths.

/// Literal written in place of every `/` in a name.
pub const SLASH_SUBSTITUTE: &str = "-slash-";

/// Replaces every `/` in `name` with [`SLASH_SUBSTITUTE`].
///
/// Must be applied to any key or chord name before it becomes part of a path.
pub fn safe_component_name(name: &str) -> String {
    name.replace('/', SLASH_SUBSTITUTE)
}
