/// Namespace of the field tags read by the decoder
pub const TAG_NAMESPACE: &str = "tsv";

/// A parsed `tsv` field tag
///
/// The grammar is `-`, `<name>`, `,col:<n>` or `<name>,col:<n>`; anything
/// else leaves the field without a column. The key in front of the `:` is
/// not checked, so `,pos:3` means the same as `,col:3`.
///
/// # Examples
///
/// ```
/// use syb_tsv::Tag;
///
/// assert_eq!(Tag::parse("-"), Tag::Skip);
/// assert_eq!(Tag::parse("age"), Tag::ByName("age"));
/// assert_eq!(Tag::parse(",col:3"), Tag::ByOrdinal(3));
/// assert_eq!(Tag::parse("age,col:1"), Tag::ByNameThenOrdinal("age", 1));
/// assert_eq!(Tag::parse(",row:1"), Tag::ByOrdinal(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag<'a> {
    /// Never decode into this field
    Skip,
    /// Column looked up by name in the header
    ByName(&'a str),
    /// Column given by position
    ByOrdinal(usize),
    /// Both a name and a position; the name decides
    ByNameThenOrdinal(&'a str, usize),
    /// No usable column information
    Unresolved,
}

impl<'a> Tag<'a> {
    pub fn parse(tag: &'a str) -> Self {
        if tag == "-" {
            return Tag::Skip;
        }

        let mut parts = tag.split(',');
        let name = parts.next().unwrap_or_default();
        let ordinal = parts.next().and_then(parse_ordinal);
        match (name.is_empty(), ordinal) {
            (false, Some(n)) => Tag::ByNameThenOrdinal(name, n),
            (false, None) => Tag::ByName(name),
            (true, Some(n)) => Tag::ByOrdinal(n),
            (true, None) => Tag::Unresolved,
        }
    }

    /// Column index of this field given the header read so far
    ///
    /// A name that is not part of the header (or an empty header) resolves
    /// to nothing, even when an ordinal is present.
    pub fn resolve(&self, header: &[String]) -> Option<usize> {
        match *self {
            Tag::ByName(name) | Tag::ByNameThenOrdinal(name, _) => {
                header.iter().position(|h| h == name)
            }
            Tag::ByOrdinal(n) => Some(n),
            Tag::Skip | Tag::Unresolved => None,
        }
    }
}

/// Parses `<key>:<n>`; negative ordinals are treated as absent
fn parse_ordinal(segment: &str) -> Option<usize> {
    let (_key, value) = segment.split_once(':')?;
    if value.contains(':') {
        return None;
    }
    let n: i64 = value.parse().ok()?;
    usize::try_from(n).ok()
}
