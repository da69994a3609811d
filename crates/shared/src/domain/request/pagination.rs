use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::utils::deserialize_page;

pub const QUESTIONS_PER_PAGE: u64 = 10;

#[derive(Serialize, Deserialize, Clone, Debug, IntoParams)]
pub struct PageQuery {
    /// 1-based page number, 10 questions per page.
    #[serde(default = "default_page", deserialize_with = "deserialize_page")]
    #[param(default = 1, minimum = 1)]
    pub page: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: default_page() }
    }
}

fn default_page() -> i64 {
    1
}

/// A fixed-size window `[(page-1)*per_page, page*per_page)` over an ordered
/// sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
}

impl Pagination {
    /// Pages below 1 are treated as the first page.
    pub fn new(page: i64) -> Self {
        let page = if page > 0 { page as u64 } else { 1 };
        Self {
            page,
            per_page: QUESTIONS_PER_PAGE,
        }
    }

    pub fn limit(&self) -> u64 {
        self.per_page
    }

    /// Saturates at `i64::MAX` so the value still binds as a signed SQLite
    /// integer.
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.per_page)
            .min(i64::MAX as u64)
    }
}

impl From<&PageQuery> for Pagination {
    fn from(query: &PageQuery) -> Self {
        Pagination::new(query.page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_follows_page_number() {
        let p = Pagination::new(1);
        assert_eq!((p.offset(), p.limit()), (0, 10));

        let p = Pagination::new(3);
        assert_eq!((p.offset(), p.limit()), (20, 10));
    }

    #[test]
    fn non_positive_pages_clamp_to_first() {
        assert_eq!(Pagination::new(0), Pagination::new(1));
        assert_eq!(Pagination::new(-4), Pagination::new(1));
    }

    #[test]
    fn huge_pages_do_not_overflow() {
        let p = Pagination::new(i64::MAX);
        assert_eq!(p.offset(), i64::MAX as u64);
    }

    #[test]
    fn window_sizes_match_remaining_rows() {
        let total: u64 = 19;

        for page in 1..=4_i64 {
            let p = Pagination::new(page);
            let size = total.saturating_sub(p.offset()).min(p.limit());
            let expected = 10_u64.min(19_u64.saturating_sub(10 * (page as u64 - 1)));
            assert_eq!(size, expected, "page {page}");
        }

        assert_eq!(Pagination::new(2).offset(), 10);
        assert_eq!(Pagination::new(3).offset(), 20);
    }

    #[test]
    fn query_defaults_and_garbage() {
        let q: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.page, 1);

        let q: PageQuery = serde_json::from_str(r#"{"page": "2"}"#).unwrap();
        assert_eq!(q.page, 2);

        let q: PageQuery = serde_json::from_str(r#"{"page": "two"}"#).unwrap();
        assert_eq!(q.page, 1);
    }
}
