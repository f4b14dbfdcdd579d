use crate::core::DynArray;

/// Iterator over elements in a `DynArray`
#[derive(Clone)]
pub struct DynArrayIter<'a, T> {
    array: &'a DynArray<T>,
    current: usize,
}

impl<'a, T: Clone> Iterator for DynArrayIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.array.get(self.current)?;
        self.current += 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len() - self.current;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for DynArrayIter<'_, T> {}

impl<'a, T: Clone> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = DynArrayIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        DynArrayIter {
            array: self,
            current: 0,
        }
    }
}
