/// Plain limit/offset paging for list queries.
#[derive(Debug, Clone, Copy)]
pub struct LimitOffset {
    pub limit: i64,
    pub offset: i64,
}

impl LimitOffset {
    pub const MAX_LIMIT: i64 = 200;

    /// Clamp caller-supplied paging into a sane range.
    pub fn clamped(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            limit: limit.unwrap_or(50).clamp(1, Self::MAX_LIMIT),
            offset: offset.unwrap_or(0).max(0),
        }
    }
}

impl Default for LimitOffset {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_bounds_limit_and_offset() {
        let p = LimitOffset::clamped(Some(10_000), Some(-5));
        assert_eq!(p.limit, LimitOffset::MAX_LIMIT);
        assert_eq!(p.offset, 0);

        let p = LimitOffset::clamped(None, None);
        assert_eq!(p.limit, 50);
        assert_eq!(p.offset, 0);

        let p = LimitOffset::clamped(Some(0), Some(3));
        assert_eq!(p.limit, 1);
        assert_eq!(p.offset, 3);
    }
}
