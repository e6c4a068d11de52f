use std::str::FromStr;
use std::str::Utf8Error;

use thiserror::Error;

/// Takes the next line from the slice, consuming its terminator.
///
/// A line ends at `\n`, `\r\n`, or the end of input. The terminator is not
/// part of the returned line. Returns `None` once the input is exhausted.
pub fn take_line(bytes: &[u8]) -> (Option<&[u8]>, &[u8]) {
    if bytes.is_empty() {
        return (None, bytes);
    }

    let (line, bytes) = match bytes.iter().position(|&b| b == b'\n') {
        Some(i) => (&bytes[..i], &bytes[i + 1..]),
        None => bytes.split_at(bytes.len()),
    };

    let line = line.strip_suffix(b"\r").unwrap_or(line);

    (Some(line), bytes)
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Error parsing bytes from UTF-8: {0}")]
    InvalidUTF8(#[from] Utf8Error),

    #[error("Failed to convert \"{str}\"")]
    ParseError { str: String },
}

/// Converts `&[u8]` to `T` if `T: FromStr`.
pub fn convert<T: FromStr>(bytes: &[u8]) -> Result<T, ConvertError> {
    let str = str::from_utf8(bytes)?;

    let Ok(res) = str.trim().parse::<T>() else {
        return Err(ConvertError::ParseError {
            str: str.to_string(),
        });
    };

    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::take_line;

    #[test]
    fn take_line_lf() {
        let (line, rest) = take_line(b"12\n34\n");

        assert_eq!(line, Some(b"12".as_slice()));
        assert_eq!(rest, b"34\n");
    }

    #[test]
    fn take_line_crlf() {
        let (line, rest) = take_line(b"12\r\n34");

        assert_eq!(line, Some(b"12".as_slice()));
        assert_eq!(rest, b"34");
    }

    #[test]
    fn take_line_without_terminator() {
        let (line, rest) = take_line(b"34");

        assert_eq!(line, Some(b"34".as_slice()));
        assert_eq!(rest, b"");
    }

    #[test]
    fn take_line_at_eof() {
        let (line, _) = take_line(b"");

        assert_eq!(line, None);
    }

    #[test]
    fn convert_rejects_garbage() {
        assert!(super::convert::<usize>(b"12a").is_err());
        assert!(super::convert::<usize>(b"-3").is_err());
        assert_eq!(super::convert::<usize>(b"42").unwrap(), 42);
    }
}
