use crate::SortContext;
use crate::sequence::Sequence;

/// Leftmost position in `seq[..upper]` at which `value` can be inserted
/// while keeping ascending order. `seq[..upper]` must already be sorted.
pub fn lower_bound<T, S>(seq: &S, upper: usize, value: &T, ctx: &mut SortContext) -> usize
where
    T: Ord,
    S: Sequence<T>,
{
    let mut lo = 0_usize;
    let mut hi = upper;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if ctx.less(seq.get(mid), value) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

pub fn binary_insert<T, S>(seq: &mut S, value: T, ctx: &mut SortContext)
where
    T: Ord,
    S: Sequence<T>,
{
    let position = lower_bound(seq, seq.len(), &value, ctx);
    seq.insert(position, value);
}

pub fn insertion_sort<T, S>(seq: &mut S, ctx: &mut SortContext)
where
    T: Ord + Copy,
    S: Sequence<T>,
{
    for i in 1..seq.len() {
        let key = *seq.get(i);
        let mut j = i;
        while j > 0 {
            let prev = *seq.get(j - 1);
            if !ctx.less(&key, &prev) {
                break;
            }
            seq.set(j, prev);
            j -= 1;
        }
        seq.set(j, key);
    }
}

pub fn binary_insertion_sort<T, S>(seq: &mut S, ctx: &mut SortContext)
where
    T: Ord + Copy,
    S: Sequence<T>,
{
    for i in 1..seq.len() {
        let key = *seq.get(i);
        let position = lower_bound(seq, i, &key, ctx);
        let mut j = i;
        while j > position {
            let prev = *seq.get(j - 1);
            seq.set(j, prev);
            j -= 1;
        }
        seq.set(position, key);
    }
}
