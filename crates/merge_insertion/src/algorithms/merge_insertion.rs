use crate::sequence::Sequence;
use crate::{SortContext, TUNED_PARAMS, jacobsthal};

use super::common;

/// Merge-insertion sort (Ford-Johnson).
///
/// Pairs consecutive elements, recursively sorts the larger element of each
/// pair, then merges the smaller elements back in following the Jacobsthal
/// insertion order. An odd-length leftover is held aside and reinserted
/// last. Not stable.
pub fn sort<T, S>(seq: &mut S, ctx: &mut SortContext)
where
    T: Ord + Copy,
    S: Sequence<T>,
{
    let len = seq.len();
    if len < 2 {
        return;
    }
    if len <= TUNED_PARAMS.small_sort_threshold {
        common::insertion_sort(seq, ctx);
        return;
    }

    let straggler = if len % 2 == 1 { seq.pop() } else { None };

    // Pair consecutive elements: the larger joins the main-chain
    // candidates, the smaller waits in pend in pairing order.
    let paired = seq.len();
    let mut chain = S::with_capacity(len);
    let mut pend = S::with_capacity(paired / 2);
    let mut i = 0_usize;
    while i < paired {
        let first = *seq.get(i);
        let second = *seq.get(i + 1);
        if ctx.less(&first, &second) {
            chain.push(second);
            pend.push(first);
        } else {
            chain.push(first);
            pend.push(second);
        }
        i += 2;
    }

    sort(&mut chain, ctx);

    // Seed insertion: pend[0] goes in by the same sorted-order search the
    // merge loop uses.
    common::binary_insert(&mut chain, *pend.get(0), ctx);

    for index in jacobsthal::insertion_order(pend.len()) {
        common::binary_insert(&mut chain, *pend.get(index), ctx);
    }

    if let Some(value) = straggler {
        common::binary_insert(&mut chain, value, ctx);
    }

    *seq = chain;
}
