//! Assigning cell strings to record fields

use syb_structinfo::ValueMut;

use crate::error::{Error, ParseBoolError};

/// Parse a boolean cell
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
///
/// # Examples
///
/// ```
/// use syb_tsv::coerce::parse_bool;
///
/// assert_eq!(parse_bool("T"), Ok(true));
/// assert_eq!(parse_bool("0"), Ok(false));
/// assert!(parse_bool("yes").is_err());
/// ```
pub fn parse_bool(cell: &str) -> Result<bool, ParseBoolError> {
    match cell {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseBoolError(cell.to_owned())),
    }
}

/// Parse an integer cell in base 10
///
/// All integer fields go through this 64 bit signed parse; narrower and
/// unsigned fields receive the value truncated with `as`, so `-1` lands in an
/// unsigned field as its maximum value.
pub fn parse_int(cell: &str) -> Result<i64, Error> {
    cell.parse().map_err(|source| Error::ParseInt {
        value: cell.to_owned(),
        source,
    })
}

/// Store `cell` in `field` according to the field's kind
///
/// Fields of unsupported kinds are left as they are.
pub fn assign(field: ValueMut<'_>, cell: &str) -> Result<(), Error> {
    use ValueMut as V;
    match field {
        V::String(v) => {
            v.clear();
            v.push_str(cell);
        }
        V::Bool(v) => *v = parse_bool(cell)?,
        V::Int(v) => *v = parse_int(cell)? as isize,
        V::Int8(v) => *v = parse_int(cell)? as i8,
        V::Int16(v) => *v = parse_int(cell)? as i16,
        V::Int32(v) => *v = parse_int(cell)? as i32,
        V::Int64(v) => *v = parse_int(cell)?,
        V::Uint(v) => *v = parse_int(cell)? as usize,
        V::Uint8(v) => *v = parse_int(cell)? as u8,
        V::Uint16(v) => *v = parse_int(cell)? as u16,
        V::Uint32(v) => *v = parse_int(cell)? as u32,
        V::Uint64(v) => *v = parse_int(cell)? as u64,
        V::Unsupported(_) => {}
    }
    Ok(())
}
