//! Interactive coordinate entry.
//!
//! Each axis is asked for until a value validates; only then does the next
//! axis start. Reader and writer are generic so the loops can be driven from
//! tests as well as from stdin/stdout.

use std::io::{self, BufRead, Write};

use crate::coordinate::{check_coordinate, clean_coordinate, Axis, EcefCoordinates};
use crate::error::Result;

/// Prompt for a single axis until the entered value is a number.
///
/// Returns the cleaned value. Each invalid attempt prints `Invalid input`
/// once before prompting again.
///
/// # Errors
///
/// Returns an IO error if reading or writing fails, or
/// [`io::ErrorKind::UnexpectedEof`] if input ends before a valid value.
pub fn prompt_coordinate<R: BufRead, W: Write>(
    axis: Axis,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    let mut value: Option<String> = None;

    while !check_coordinate(value.as_deref(), output)? {
        write!(output, "{}: ", axis)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input ended before a value for {} was entered", axis),
            )
            .into());
        }
        let line = line.trim_end_matches(['\r', '\n']);
        value = Some(clean_coordinate(line));
    }

    // The loop only exits once `value` holds a valid entry.
    Ok(value.unwrap_or_default())
}

/// Prompt for X, Y and Z in order.
pub fn prompt_coordinates<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<EcefCoordinates> {
    writeln!(output, "Input your coordinates:")?;

    let mut values: [String; 3] = Default::default();
    for (axis, value) in Axis::ALL.into_iter().zip(values.iter_mut()) {
        *value = prompt_coordinate(axis, input, output)?;
    }

    let [x, y, z] = values;
    Ok(EcefCoordinates::from_validated(x, y, z))
}
