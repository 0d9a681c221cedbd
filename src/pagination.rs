use serde::Deserialize;

/// Default page size when the client sends nothing usable.
const DEFAULT_LIMIT: i64 = 10;
/// Hard ceiling on page size.
const MAX_LIMIT: i64 = 100;

/// Query parameters accepted by every list endpoint.
///
/// Values arrive as raw strings so malformed input degrades to defaults
/// instead of rejecting the request.
#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

/// Normalized pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub offset: i64,
}

/// Derives `{page, limit, offset}` from untrusted query input.
///
/// Total over all inputs: missing or non-numeric values fall back to
/// defaults, `page` is floored at 1 and `limit` is clamped into
/// `[1, 100]`.
pub fn get_pagination(page: Option<&str>, limit: Option<&str>) -> Pagination {
    let page = page
        .and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(1)
        .max(1);

    let limit = limit
        .and_then(|l| l.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_LIMIT)
        .clamp(1, MAX_LIMIT);

    Pagination {
        page,
        limit,
        offset: (page - 1) * limit,
    }
}

/// Pagination metadata returned alongside every listed page.
#[derive(serde::Serialize, Debug)]
pub struct Meta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

impl Meta {
    pub fn new(pagination: &Pagination, total: i64) -> Self {
        Self {
            page: pagination.page,
            limit: pagination.limit,
            total,
            total_pages: (total + pagination.limit - 1) / pagination.limit,
        }
    }
}

/// The `{data, meta}` envelope shared by all paginated list endpoints.
#[derive(serde::Serialize, Debug)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: Meta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_absent() {
        let p = get_pagination(None, None);
        assert_eq!(p, Pagination { page: 1, limit: 10, offset: 0 });
    }

    #[test]
    fn non_numeric_page_and_oversized_limit() {
        let p = get_pagination(Some("abc"), Some("500"));
        assert_eq!(p, Pagination { page: 1, limit: 100, offset: 0 });
    }

    #[test]
    fn negative_and_zero_inputs_are_floored() {
        let p = get_pagination(Some("-3"), Some("0"));
        assert_eq!(p, Pagination { page: 1, limit: 1, offset: 0 });
    }

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        let p = get_pagination(Some("4"), Some("25"));
        assert_eq!(p, Pagination { page: 4, limit: 25, offset: 75 });
    }

    #[test]
    fn limit_always_within_bounds() {
        for limit in ["-50", "0", "1", "10", "99", "100", "101", "", "x"] {
            let p = get_pagination(None, Some(limit));
            assert!((1..=100).contains(&p.limit), "limit {limit} -> {}", p.limit);
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        let p = get_pagination(Some("1"), Some("10"));
        assert_eq!(Meta::new(&p, 0).total_pages, 0);
        assert_eq!(Meta::new(&p, 1).total_pages, 1);
        assert_eq!(Meta::new(&p, 10).total_pages, 1);
        assert_eq!(Meta::new(&p, 11).total_pages, 2);
    }
}
