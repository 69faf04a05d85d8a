use std::{borrow::Cow, collections::hash_map::Entry};

use rustc_hash::FxHashMap;
use unicase::Ascii;

/// A scope for names that must stay distinct under ASCII case folding.
///
/// A scope produces names that never collide with other names within the
/// same scope, even when the downstream tooling compares them
/// case-insensitively. The first occurrence of a name keeps its original
/// spelling; the second and later occurrences get a `_1`, `_2`, … suffix
/// in insertion order.
///
/// This is useful for disambiguating declarations that are distinct in the
/// source schema, but collide once a case-insensitive filesystem or code
/// index gets involved. For example, `JEDI` and `jedi` are distinct enum
/// values, but name the same file on macOS.
#[derive(Debug, Default)]
pub struct UniqueNamesScope {
    space: FxHashMap<Ascii<String>, usize>,
}

impl UniqueNamesScope {
    /// Creates a new, empty scope.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new scope that reserves the given names.
    ///
    /// Reserved names are treated as already present, so the first use of
    /// one gets a suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use selgen_core::codegen::UniqueNamesScope;
    /// let mut scope = UniqueNamesScope::with_reserved(["RootQuery"]);
    /// assert_eq!(scope.uniquify("RootQuery"), "RootQuery_1");
    /// assert_eq!(scope.uniquify("rootquery"), "rootquery_2");
    /// ```
    pub fn with_reserved<S: AsRef<str>>(reserved: impl IntoIterator<Item = S>) -> Self {
        let space = reserved
            .into_iter()
            .map(|name| Ascii::new(name.as_ref().to_owned()))
            .fold(FxHashMap::default(), |mut space, name| {
                // Setting the count to 1 automatically filters out duplicates.
                space.insert(name, 1);
                space
            });
        Self { space }
    }

    /// Adds a name to this scope. If no earlier name folds to the same
    /// ASCII-lowercase string, returns the name as-is; otherwise, returns
    /// the name with the next `_{n}` suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use selgen_core::codegen::UniqueNamesScope;
    /// let mut scope = UniqueNamesScope::new();
    /// assert_eq!(scope.uniquify("JEDI"), "JEDI");
    /// assert_eq!(scope.uniquify("jedi"), "jedi_1");
    /// assert_eq!(scope.uniquify("Jedi"), "Jedi_2");
    /// ```
    pub fn uniquify<'a>(&mut self, name: &'a str) -> Cow<'a, str> {
        match self.space.entry(Ascii::new(name.to_owned())) {
            Entry::Occupied(mut entry) => {
                let count = entry.get_mut();
                let unique = format!("{name}_{count}");
                *count += 1;
                unique.into()
            }
            Entry::Vacant(entry) => {
                entry.insert(1);
                name.into()
            }
        }
    }
}
