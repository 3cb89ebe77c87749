/// Recursion parameters derived from the vertex count per the component
/// design: `k` governs FindPivots' frontier-reduction factor and the base
/// case's settled-vertex cap; `t` governs block sizes and level count;
/// `max_level` bounds the BMSSP recursion depth.
#[derive(Debug, Clone, Copy)]
pub struct BmsspParams {
    pub k: usize,
    pub t: usize,
    pub max_level: usize,
}

impl BmsspParams {
    /// Derives parameters from `n` alone: `logn = max(1, log2 n)`,
    /// `k = max(2, floor(logn^(1/3)))`, `t = max(1, floor(logn^(2/3)))`,
    /// `max_level = ceil(logn / t)`.
    pub fn from_vertex_count(n: usize) -> Self {
        let logn = (n.max(1) as f64).log2().max(1.0);
        let k = (logn.powf(1.0 / 3.0).floor() as usize).max(2);
        let t = (logn.powf(2.0 / 3.0).floor() as usize).max(1);
        let max_level = (logn / t as f64).ceil() as usize;

        BmsspParams {
            k,
            t,
            max_level: max_level.max(1),
        }
    }

    /// Overrides `k` and `t` explicitly, recomputing `max_level` from the
    /// given `n` and `t`. Used by tests and benchmarking callers who want to
    /// exercise specific recursion shapes.
    pub fn with_explicit(n: usize, k: usize, t: usize) -> Self {
        let logn = (n.max(1) as f64).log2().max(1.0);
        let k = k.max(2);
        let t = t.max(1);
        let max_level = (logn / t as f64).ceil() as usize;

        BmsspParams {
            k,
            t,
            max_level: max_level.max(1),
        }
    }

    /// Block size for a given BMSSP recursion level: `2^((level-1)*t)`.
    pub fn block_size(&self, level: usize) -> usize {
        if level == 0 {
            1
        } else {
            1usize
                .checked_shl(((level - 1) * self.t).min(62) as u32)
                .unwrap_or(usize::MAX)
        }
    }

    /// Workload cap for a given BMSSP recursion level: `k * 2^(level*t)`.
    pub fn workload_cap(&self, level: usize) -> usize {
        let shift = (level * self.t).min(62) as u32;
        self.k.saturating_mul(1usize.checked_shl(shift).unwrap_or(usize::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_satisfy_minimums_for_tiny_graphs() {
        let params = BmsspParams::from_vertex_count(1);
        assert!(params.k >= 2);
        assert!(params.t >= 1);
        assert!(params.max_level >= 1);
    }

    #[test]
    fn params_grow_with_vertex_count() {
        let small = BmsspParams::from_vertex_count(16);
        let large = BmsspParams::from_vertex_count(1_000_000);
        assert!(large.k >= small.k);
    }

    #[test]
    fn block_size_is_one_at_level_zero() {
        let params = BmsspParams::from_vertex_count(1000);
        assert_eq!(params.block_size(0), 1);
    }

    #[test]
    fn explicit_override_respects_minimums() {
        let params = BmsspParams::with_explicit(1000, 0, 0);
        assert_eq!(params.k, 2);
        assert_eq!(params.t, 1);
    }
}
