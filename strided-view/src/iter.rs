//! Iterators over strided views.

use crate::view::{MatrixView, VectorView};

/// Element iterator over a strided vector.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    data: &'a [T],
    front: isize,
    stride: isize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(data: &'a [T], offset: isize, stride: isize, len: usize) -> Self {
        Self {
            data,
            front: offset,
            stride,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let item = &self.data[self.front as usize];
        self.front += self.stride;
        self.remaining -= 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let pos = self.front + self.remaining as isize * self.stride;
        Some(&self.data[pos as usize])
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Iterator over whole rows or whole columns of a matrix view.
///
/// Each item is a [`VectorView`]; iterating that view walks the inner axis.
#[derive(Debug, Clone)]
pub struct Lanes<'a, T> {
    view: MatrixView<'a, T>,
    by_rows: bool,
    next: usize,
    end: usize,
}

impl<'a, T> Lanes<'a, T> {
    pub(crate) fn new(view: MatrixView<'a, T>, by_rows: bool) -> Self {
        let end = if by_rows { view.nrows() } else { view.ncols() };
        Self {
            view,
            by_rows,
            next: 0,
            end,
        }
    }

    /// `true` when the lanes are rows.
    pub fn by_rows(&self) -> bool {
        self.by_rows
    }

    fn lane(&self, i: usize) -> VectorView<'a, T> {
        if self.by_rows {
            self.view.row(i)
        } else {
            self.view.column(i)
        }
    }
}

impl<'a, T> Iterator for Lanes<'a, T> {
    type Item = VectorView<'a, T>;

    fn next(&mut self) -> Option<VectorView<'a, T>> {
        if self.next >= self.end {
            return None;
        }
        let lane = self.lane(self.next);
        self.next += 1;
        Some(lane)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Lanes<'a, T> {
    fn next_back(&mut self) -> Option<VectorView<'a, T>> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.lane(self.end))
    }
}

impl<T> ExactSizeIterator for Lanes<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::view::VectorView;

    #[test]
    fn test_iter_both_ends() {
        let data = [1, 2, 3, 4, 5, 6];
        let v = VectorView::new(&data, 3, 2, 0).unwrap();
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), vec![5, 3, 1]);
        assert_eq!(v.iter().len(), 3);
        let mut it = v.iter();
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.next(), Some(&3));
        assert_eq!(it.next(), None);
    }
}
