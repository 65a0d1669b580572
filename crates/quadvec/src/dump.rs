//! Diagnostic dump of a container's live elements.
//!
//! A collaborator outside the container core: debugging sessions and
//! the smoke driver want an indexed, one-line-per-element view, which
//! is too opinionated to live on the type itself.

use std::fmt::Display;
use std::io::{self, Write};

use crate::vec::QuadVec;

/// Write an indexed element dump to `sink`, one `name[i] = value` line
/// per live element.
///
/// # Examples
///
/// ```
/// use quadvec::{dump, QuadVec};
///
/// let v = QuadVec::from_slice(&[7, 9]).unwrap();
/// let mut out = Vec::new();
/// dump(&v, "v", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "v[0] = 7\nv[1] = 9\n");
/// ```
pub fn dump<T, W>(vec: &QuadVec<T>, name: &str, sink: &mut W) -> io::Result<()>
where
    T: Display,
    W: Write,
{
    for (i, item) in vec.iter().enumerate() {
        writeln!(sink, "{name}[{i}] = {item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_element() {
        let v = QuadVec::from_slice(&[1.5, 2.5]).unwrap();
        let mut out = Vec::new();
        dump(&v, "data", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "data[0] = 1.5\ndata[1] = 2.5\n"
        );
    }

    #[test]
    fn empty_container_writes_nothing() {
        let v = QuadVec::<u8>::new();
        let mut out = Vec::new();
        dump(&v, "v", &mut out).unwrap();
        assert!(out.is_empty());
    }
}
