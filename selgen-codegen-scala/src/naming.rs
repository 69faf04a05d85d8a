use std::borrow::Cow;

use rustc_hash::FxHashMap;
use selgen_core::codegen::UniqueNamesScope;

/// Scala reserved words that need backtick quoting when used as
/// identifiers.
const KEYWORDS: &[&str] = &[
    "abstract",
    "case",
    "catch",
    "class",
    "def",
    "do",
    "else",
    "extends",
    "false",
    "final",
    "finally",
    "for",
    "forSome",
    "if",
    "implicit",
    "import",
    "lazy",
    "match",
    "new",
    "null",
    "object",
    "override",
    "package",
    "private",
    "protected",
    "return",
    "sealed",
    "super",
    "this",
    "throw",
    "trait",
    "true",
    "try",
    "type",
    "val",
    "var",
    "while",
    "with",
    "yield",
];

/// `java.lang.Object` members. A case-class field with one of these names
/// clashes with the inherited member, so it gets a `$` marker suffix.
const OBJECT_MEMBERS: &[&str] = &[
    "clone",
    "equals",
    "finalize",
    "getClass",
    "hashCode",
    "notify",
    "notifyAll",
    "toString",
    "wait",
];

/// Makes a GraphQL name safe as a Scala identifier in method, parameter,
/// and type positions.
///
/// Reserved words are backtick-quoted (`` `type` ``), as are the shapes
/// Scala won't accept bare: a lone `_`, a trailing `_` (which would fuse
/// with a following `:`), and a leading `_` not followed by a letter
/// (`__meta`, `_1`). A single leading underscore before a letter is
/// accepted bare (`_nickname`).
pub fn safe_name(name: &str) -> Cow<'_, str> {
    let quoted = KEYWORDS.contains(&name)
        || name == "_"
        || name.ends_with('_')
        || (name.starts_with('_')
            && !name[1..].starts_with(|c: char| c.is_ascii_alphabetic()));
    if quoted {
        format!("`{name}`").into()
    } else {
        name.into()
    }
}

/// Owned variant of [`safe_name`] for derived identifiers built with
/// `format!`.
pub fn safe_name_owned(name: String) -> String {
    match safe_name(&name) {
        Cow::Borrowed(_) => name,
        Cow::Owned(quoted) => quoted,
    }
}

/// Makes a GraphQL input-field name safe as a Scala case-class field.
///
/// Names of `java.lang.Object` members get a `$` suffix (`wait$`); the
/// wire string keeps the original name. Everything else follows
/// [`safe_name`].
pub fn safe_record_field(name: &str) -> Cow<'_, str> {
    if OBJECT_MEMBERS.contains(&name) {
        format!("{name}$").into()
    } else {
        safe_name(name)
    }
}

/// Mangled names for every top-level declaration in the document.
///
/// Declarations are registered in emission order; two names that collide
/// under ASCII case folding keep the first occurrence intact and suffix
/// the rest (`_1`, `_2`, …). Reference sites resolve through this map so
/// declarations and references always agree. Undeclared names (unknown
/// scalars) resolve to themselves.
#[derive(Debug)]
pub struct DeclNames<'a> {
    names: FxHashMap<&'a str, String>,
}

impl<'a> DeclNames<'a> {
    pub fn new<R: AsRef<str>>(
        reserved: impl IntoIterator<Item = R>,
        declared: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut scope = UniqueNamesScope::with_reserved(reserved);
        let names = declared
            .into_iter()
            .map(|name| (name, scope.uniquify(name).into_owned()))
            .collect();
        Self { names }
    }

    /// Returns the mangled declaration name, or the name itself when it
    /// was never declared.
    pub fn resolve<'b>(&'b self, name: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.names.get(name).map_or(name, String::as_str)
    }
}
