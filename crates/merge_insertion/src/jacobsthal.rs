/// Jacobsthal number J(k): J(0)=0, J(1)=1, J(k)=J(k-1)+2*J(k-2).
///
/// Saturates at `u64::MAX`; a saturated term already exceeds any real
/// sequence length, so callers that clip against a length are unaffected.
pub fn jacobsthal(k: u32) -> u64 {
    let mut prev = 0_u64;
    let mut cur = 1_u64;
    if k == 0 {
        return 0;
    }
    for _ in 1..k {
        let next = cur.saturating_add(prev.saturating_mul(2));
        prev = cur;
        cur = next;
    }
    cur
}

/// Merge order over the pending indices `[1, n)`.
///
/// Visits each successive Jacobsthal number below `n`, then the indices
/// between it and the previous Jacobsthal number in descending order.
/// Jacobsthal numbers at or above `n` are skipped and the remaining indices
/// are emitted in descending order. Index 0 is never emitted, it is the
/// seed insertion handled before the merge loop.
pub fn insertion_order(n: usize) -> Vec<usize> {
    if n < 2 {
        return Vec::new();
    }

    let mut order = Vec::with_capacity(n - 1);
    order.push(1);
    let mut prev = 1_usize;
    // J(3) = 3 is the first boundary past index 1.
    let mut k = 3_u32;

    while prev + 1 < n {
        let j = jacobsthal(k);
        if j < n as u64 {
            let j = j as usize;
            order.push(j);
            for index in (prev + 1..j).rev() {
                order.push(index);
            }
            prev = j;
        } else {
            for index in (prev + 1..n).rev() {
                order.push(index);
            }
            prev = n - 1;
        }
        k += 1;
    }

    order
}
