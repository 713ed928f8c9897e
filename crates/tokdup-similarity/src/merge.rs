//! Lock-step walk over two id-sorted bags.

use std::cmp::Ordering;

use tokdup_model::TokenCount;

/// One id of the union, tagged with the side(s) it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Left(u32),
    Right(u32),
    Both(u32, u32),
}

/// Yields the frequencies of every id in the union of two ascending bags.
pub(crate) struct MergeJoin<'a> {
    a: &'a [TokenCount],
    b: &'a [TokenCount],
    i: usize,
    j: usize,
}

impl<'a> MergeJoin<'a> {
    pub(crate) fn new(a: &'a [TokenCount], b: &'a [TokenCount]) -> Self {
        Self { a, b, i: 0, j: 0 }
    }
}

impl Iterator for MergeJoin<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        match (self.a.get(self.i), self.b.get(self.j)) {
            (None, None) => None,
            (Some(x), None) => {
                self.i += 1;
                Some(Step::Left(x.freq))
            }
            (None, Some(y)) => {
                self.j += 1;
                Some(Step::Right(y.freq))
            }
            (Some(x), Some(y)) => match x.id.cmp(&y.id) {
                Ordering::Less => {
                    self.i += 1;
                    Some(Step::Left(x.freq))
                }
                Ordering::Greater => {
                    self.j += 1;
                    Some(Step::Right(y.freq))
                }
                Ordering::Equal => {
                    self.i += 1;
                    self.j += 1;
                    Some(Step::Both(x.freq, y.freq))
                }
            },
        }
    }
}
