//! Owned dense vector.

use crate::error::{Result, StridedError};
use crate::view::{Slice, VectorView, VectorViewMut};
use num_traits::Zero;
use std::ops::{Index, IndexMut, Range};

/// Owned, contiguous vector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Create a vector with values produced by `f(i)`.
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        Self {
            data: (0..len).map(f).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn view(&self) -> VectorView<'_, T> {
        VectorView::from_slice(&self.data)
    }

    pub fn view_mut(&mut self) -> VectorViewMut<'_, T> {
        VectorViewMut::from_slice(&mut self.data)
    }

    /// Sub-range proxy sharing storage.
    pub fn slice(&self, range: Range<usize>) -> Result<VectorView<'_, T>> {
        self.view().slice(range)
    }

    /// Strided sub-selection proxy sharing storage.
    pub fn slice_by(&self, s: Slice) -> Result<VectorView<'_, T>> {
        self.view().slice_by(s)
    }

    pub fn slice_mut(&mut self, range: Range<usize>) -> Result<VectorViewMut<'_, T>> {
        if range.start > range.end || range.end > self.data.len() {
            return Err(StridedError::BadArgument(format!(
                "range {}..{} outside vector of length {}",
                range.start,
                range.end,
                self.data.len()
            )));
        }
        let len = range.end - range.start;
        VectorViewMut::new(&mut self.data, len, 1, range.start as isize)
    }
}

impl<T: Clone> Vector<T> {
    pub fn from_elem(len: usize, value: T) -> Self {
        Self {
            data: vec![value; len],
        }
    }
}

impl<T: Clone + Zero> Vector<T> {
    pub fn zeros(len: usize) -> Self {
        Self::from_elem(len, T::zero())
    }
}

impl<T: Copy> Vector<T> {
    #[inline]
    pub fn get(&self, i: usize) -> T {
        self.data[i]
    }

    #[inline]
    pub fn set(&mut self, i: usize, value: T) {
        self.data[i] = value;
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Copy> VectorView<'_, T> {
    /// Copy the viewed elements into an owned vector.
    pub fn to_vector(&self) -> Vector<T> {
        Vector::from_vec(self.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_and_access() {
        let mut v = Vector::<f64>::zeros(4);
        v.set(2, 3.5);
        v[0] = -1.0;
        assert_eq!(v.as_slice(), &[-1.0, 0.0, 3.5, 0.0]);
        assert_eq!(Vector::from_fn(3, |i| i * 2).into_vec(), vec![0, 2, 4]);
        assert!(Vector::<f32>::new().is_empty());
    }

    #[test]
    fn test_slice_mut_writes_through() {
        let mut v = Vector::from_vec(vec![1.0f64; 6]);
        {
            let mut s = v.slice_mut(2..5).unwrap();
            s.fill(0.0);
        }
        assert_eq!(v.as_slice(), &[1.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        assert!(v.slice_mut(4..7).is_err());
        assert_eq!(v.slice(0..2).unwrap().to_vector(), Vector::from_vec(vec![1.0, 1.0]));
    }
}
