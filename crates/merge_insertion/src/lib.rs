mod algorithms;
pub mod jacobsthal;
mod parse;
mod sequence;

pub use parse::{ParseValueError, parse_value, parse_values};
pub use sequence::Sequence;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    BinaryInsertionSort,
    MergeInsertion,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 3] = [
    SortAlgorithm::InsertionSort,
    SortAlgorithm::BinaryInsertionSort,
    SortAlgorithm::MergeInsertion,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::BinaryInsertionSort => "binary_insertion_sort",
        SortAlgorithm::MergeInsertion => "merge_insertion",
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub small_sort_threshold: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    small_sort_threshold: 16,
};

/// Per-invocation sort state: the tally of element comparisons made.
/// Every comparison the algorithms perform is routed through [`Self::less`].
#[derive(Clone, Debug, Default)]
pub struct SortContext {
    pub comparisons: u64,
}

impl SortContext {
    #[inline]
    pub(crate) fn less<T: Ord>(&mut self, a: &T, b: &T) -> bool {
        self.comparisons += 1;
        a < b
    }
}

pub fn sort_seq<T, S>(algo: SortAlgorithm, seq: &mut S, ctx: &mut SortContext)
where
    T: Ord + Copy,
    S: Sequence<T>,
{
    match algo {
        SortAlgorithm::InsertionSort => algorithms::insertion::sort(seq, ctx),
        SortAlgorithm::BinaryInsertionSort => algorithms::binary_insertion::sort(seq, ctx),
        SortAlgorithm::MergeInsertion => algorithms::merge_insertion::sort(seq, ctx),
    }
}

pub fn sort_u32(algo: SortAlgorithm, data: &mut Vec<u32>) {
    let mut ctx = SortContext::default();
    sort_u32_with_ctx(algo, data, &mut ctx);
}

pub fn sort_u32_with_ctx(algo: SortAlgorithm, data: &mut Vec<u32>, ctx: &mut SortContext) {
    sort_seq(algo, data, ctx);
}
