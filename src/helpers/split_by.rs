/// `SplitBy` is the storage for the lazy splitting operation, returned by
/// [`Itertools::split_by`][super::Itertools::split_by].
///
/// This type implements [`IntoIterator`] (it is **not** an iterator itself),
/// because the group iterators need to borrow from this value. It should be
/// stored in a local variable and iterated by reference.
pub struct SplitBy<I, F>
where
    I: Iterator,
{
    group_by: itertools::GroupBy<bool, I, F>,
}

impl<I, F> SplitBy<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    pub(super) fn new(iter: I, is_separator: F) -> Self {
        Self {
            group_by: itertools::Itertools::group_by(iter, is_separator),
        }
    }
}

impl<'a, I, F> IntoIterator for &'a SplitBy<I, F>
where
    I: Iterator,
    I::Item: 'a,
    F: FnMut(&I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    type IntoIter = SplitGroups<'a, I, F>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SplitGroups {
            groups: (&self.group_by).into_iter(),
            separator_run: None,
            is_first: true,
        }
    }
}

/// Yields the items between separators, each group collected into a `Vec`.
pub struct SplitGroups<'a, I, F>
where
    I: Iterator,
    I::Item: 'a,
{
    groups: itertools::Groups<'a, bool, I, F>,
    /// `Some` while walking a run of consecutive separators.
    separator_run: Option<itertools::Group<'a, bool, I, F>>,
    is_first: bool,
}

impl<'a, I, F> Iterator for SplitGroups<'a, I, F>
where
    I: Iterator,
    I::Item: 'a,
    F: FnMut(&I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let is_first = std::mem::replace(&mut self.is_first, false);
        loop {
            // Every separator after the first one in a run closes an empty group.
            if let Some(mut run) = self.separator_run.take() {
                if run.next().is_some() {
                    self.separator_run = Some(run);
                    return Some(Vec::new());
                }
            }

            let (is_separator, mut group) = self.groups.next()?;
            if !is_separator {
                return Some(group.collect());
            }

            group.next();
            self.separator_run = Some(group);

            // A leading separator closes an empty first group.
            if is_first {
                return Some(Vec::new());
            }
        }
    }
}
