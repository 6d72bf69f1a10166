//! Grammar helpers shared by the [`FromStr`](core::str::FromStr)
//! implementations of both value types.

use log::trace;

use crate::Error;

/// Split `input` into its hour, minute and second components.
///
/// Fails with [`Error::Empty`] on empty input and with [`Error::Format`]
/// unless there are exactly three `:` separated components.
pub(crate) fn components(input: &str) -> Result<[&str; 3], Error> {
    if input.is_empty() {
        return Err(Error::Empty);
    }

    let mut parts = input.split(':');
    let (Some(hours), Some(minutes), Some(seconds), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        trace!("rejecting {input:?}: expected three components");
        return Err(Error::Format);
    };

    Ok([hours, minutes, seconds])
}

/// Parse a minute or second field, exactly `[0-5][0-9]`.
pub(crate) fn sexagesimal(field: &str) -> Result<u8, Error> {
    match field.as_bytes() {
        [tens @ b'0'..=b'5', ones @ b'0'..=b'9'] => Ok((tens - b'0') * 10 + (ones - b'0')),
        _ => {
            trace!("rejecting field {field:?}: expected two digits in 00..=59");
            Err(Error::Format)
        }
    }
}

/// Parse the hour field of a time of day, exactly `2[0-3]|[01][0-9]`.
pub(crate) fn hour_of_day(field: &str) -> Result<u8, Error> {
    match field.as_bytes() {
        [tens @ b'0'..=b'1', ones @ b'0'..=b'9'] | [tens @ b'2', ones @ b'0'..=b'3'] => {
            Ok((tens - b'0') * 10 + (ones - b'0'))
        }
        _ => {
            trace!("rejecting hour {field:?}: expected two digits in 00..=23");
            Err(Error::Format)
        }
    }
}

/// Parse an unpadded hour count, exactly `0|[1-9][0-9]*`.
///
/// A count that matches the grammar but does not fit in a [`u64`] is
/// reported as [`Error::OutOfRange`].
pub(crate) fn hour_count(field: &str) -> Result<u64, Error> {
    let bytes = field.as_bytes();

    let well_formed = match bytes {
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    };

    if !well_formed {
        trace!("rejecting hour count {field:?}: expected an unpadded number");
        return Err(Error::Format);
    }

    bytes.iter().try_fold(0u64, |acc, digit| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u64::from(digit - b'0')))
            .ok_or(Error::OutOfRange)
    })
}
