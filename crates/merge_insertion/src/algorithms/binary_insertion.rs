use crate::SortContext;
use crate::sequence::Sequence;

use super::common;

pub fn sort<T, S>(seq: &mut S, ctx: &mut SortContext)
where
    T: Ord + Copy,
    S: Sequence<T>,
{
    common::binary_insertion_sort(seq, ctx);
}
