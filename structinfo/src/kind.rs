use std::fmt;

/// The primitive kind of a record field
///
/// Only the string, integer and boolean kinds can be filled in by decoders;
/// everything else is reported as [Kind::Other] (or [Kind::Struct] for nested
/// records) and left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    String,
    Struct,
    Other,
}

impl Kind {
    /// Whether this is one of the signed integer kinds
    pub fn is_signed(&self) -> bool {
        use Kind as K;
        matches!(self, K::Int | K::Int8 | K::Int16 | K::Int32 | K::Int64)
    }

    /// Whether this is one of the unsigned integer kinds
    pub fn is_unsigned(&self) -> bool {
        use Kind as K;
        matches!(self, K::Uint | K::Uint8 | K::Uint16 | K::Uint32 | K::Uint64)
    }

    /// Whether decoders know how to assign a string to a field of this kind
    ///
    /// # Examples
    ///
    /// ```
    /// use syb_structinfo::Kind;
    ///
    /// assert!(Kind::Uint16.is_supported());
    /// assert!(Kind::String.is_supported());
    /// assert!(!Kind::Struct.is_supported());
    /// assert!(!Kind::Other.is_supported());
    /// ```
    pub fn is_supported(&self) -> bool {
        self.is_signed() || self.is_unsigned() || matches!(self, Kind::Bool | Kind::String)
    }

    pub fn as_str(&self) -> &'static str {
        use Kind as K;
        match self {
            K::Bool => "bool",
            K::Int => "int",
            K::Int8 => "int8",
            K::Int16 => "int16",
            K::Int32 => "int32",
            K::Int64 => "int64",
            K::Uint => "uint",
            K::Uint8 => "uint8",
            K::Uint16 => "uint16",
            K::Uint32 => "uint32",
            K::Uint64 => "uint64",
            K::String => "string",
            K::Struct => "struct",
            K::Other => "other",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
