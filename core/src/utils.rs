use std::fmt;

use num_enum::TryFromPrimitive;

/// Render a raw enum discriminant by variant name, or as hex when unknown.
pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Printable form of a byte slice for logs: quoted ASCII when possible, hex otherwise.
pub fn fmt_bytes(b: &[u8]) -> String {
    if !b.is_empty() && b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// Leading bytes of an artifact, capped, for diagnostics.
pub fn preview(b: &[u8], max: usize) -> String {
    fmt_bytes(&b[..b.len().min(max)])
}
