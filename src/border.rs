//! Splitting a row-major buffer into its one-pixel frame and the rest.

use crate::error::{Error, Result};

/// Output of [`extract_border`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BorderSplit<T> {
    /// First row, last row, then `first, last` of every middle row top to bottom.
    pub border: Vec<T>,
    /// Middle rows without their first and last sample, concatenated.
    pub interior: Vec<T>,
}

/// Split `buffer` (rows of `width` samples) into border and interior.
///
/// A width of 1 yields each middle-row pixel twice in the border, since it is
/// both the first and the last sample of its row.
pub fn extract_border<T: Copy>(buffer: &[T], width: usize) -> Result<BorderSplit<T>> {
    if width == 0 || buffer.len() % width != 0 || buffer.len() / width < 2 {
        return Err(Error::InvalidBufferShape {
            len: buffer.len(),
            width,
        });
    }

    let rows = buffer.len() / width;
    let (first, rest) = buffer.split_at(width);
    let (middle, last) = rest.split_at(rest.len() - width);

    let mut border = Vec::with_capacity(2 * width + 2 * (rows - 2));
    border.extend_from_slice(first);
    border.extend_from_slice(last);

    let mut interior = Vec::with_capacity((rows - 2) * width.saturating_sub(2));
    for row in middle.chunks_exact(width) {
        border.push(row[0]);
        border.push(row[width - 1]);
        if width > 2 {
            interior.extend_from_slice(&row[1..width - 1]);
        }
    }

    Ok(BorderSplit { border, interior })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_by_three() {
        let buf: Vec<u8> = (0..9).collect();
        let split = extract_border(&buf, 3).unwrap();
        assert_eq!(split.border, vec![0, 1, 2, 6, 7, 8, 3, 5]);
        assert_eq!(split.interior, vec![4]);
    }

    #[test]
    fn two_rows_have_no_interior() {
        let buf = [10, 11, 12, 13];
        let split = extract_border(&buf, 2).unwrap();
        assert_eq!(split.border, vec![10, 11, 12, 13]);
        assert!(split.interior.is_empty());
    }

    #[test]
    fn rectangular_buffer() {
        // 4 wide, 4 tall
        let buf: Vec<u8> = (0..16).collect();
        let split = extract_border(&buf, 4).unwrap();
        assert_eq!(split.border, vec![0, 1, 2, 3, 12, 13, 14, 15, 4, 7, 8, 11]);
        assert_eq!(split.interior, vec![5, 6, 9, 10]);
    }

    #[test]
    fn width_one_duplicates_middle_pixels() {
        let buf = [1, 2, 3, 4];
        let split = extract_border(&buf, 1).unwrap();
        assert_eq!(split.border, vec![1, 4, 2, 2, 3, 3]);
        assert!(split.interior.is_empty());
    }

    #[test]
    fn width_two_middle_rows_are_all_border() {
        let buf: Vec<u8> = (0..6).collect();
        let split = extract_border(&buf, 2).unwrap();
        assert_eq!(split.border, vec![0, 1, 4, 5, 2, 3]);
        assert!(split.interior.is_empty());
    }

    #[test]
    fn rejects_bad_shapes() {
        let buf: Vec<u8> = (0..7).collect();
        assert!(matches!(
            extract_border(&buf, 3),
            Err(Error::InvalidBufferShape { len: 7, width: 3 })
        ));
        assert!(matches!(
            extract_border(&buf[..3], 3),
            Err(Error::InvalidBufferShape { .. })
        ));
        assert!(matches!(extract_border(&buf, 0), Err(Error::InvalidBufferShape { .. })));
        assert!(matches!(
            extract_border::<u8>(&[], 3),
            Err(Error::InvalidBufferShape { .. })
        ));
    }
}
