//! Single-line JSON in the layout of Python's `json.dumps` defaults: `", "` between
//! items, `": "` after keys, and every non-ASCII character written as a lowercase
//! `\uXXXX` escape.
//!
//! Numbers are not reshaped: `bbox` corners print as the shortest `f32` form (`0.1`),
//! not as the widened double a Python encoder would show (`0.10000000149011612`).
use std::io;

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

#[derive(Debug, Clone, Copy, Default)]
pub struct PythonFormatter;

impl Formatter for PythonFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Writes `value` to `writer` in the wire layout, without a trailing newline.
pub fn write_wire_json<W, T>(writer: W, value: &T) -> serde_json::Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::with_formatter(writer, PythonFormatter);
    value.serialize(&mut serializer)
}

pub fn to_wire_json<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut out = Vec::with_capacity(128);
    write_wire_json(&mut out, value)?;
    String::from_utf8(out).map_err(serde_json::Error::custom)
}
