// Domain rules - Filename policies

use crate::config::Replace;

#[cfg(test)]
mod tests;

/// Separator between the parts of a clip filename
pub const FIELD_SEPARATOR: &str = " - ";

/// Rules that turn arbitrary titles into a single path component
pub struct FilenameRules;

impl FilenameRules {
    /// Case-fold, replace path separators and colons with `-`, then apply the
    /// configured mapping in order.
    pub fn munge(name: &str, replace: &Replace) -> String {
        let folded = name.to_lowercase().replace('/', "-").replace(':', "-");
        replace.apply(&folded)
    }

    /// Source recording names only get the configured mapping
    pub fn munge_source(name: &str, replace: &Replace) -> String {
        replace.apply(name)
    }

    /// Join filename fields with the standard separator
    pub fn join_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
        fields.into_iter().collect::<Vec<_>>().join(FIELD_SEPARATOR)
    }
}
