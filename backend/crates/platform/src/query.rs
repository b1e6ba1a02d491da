//! Collection Query Engine
//!
//! One generic search → sort → paginate → project pipeline over a full,
//! unfiltered collection. Each resource describes itself with a
//! [`QueryProfile`] (allow-listed fields, match strategy, defaults) and
//! exposes its fields through [`Queryable`].
//!
//! ```
//! use std::borrow::Cow;
//! use platform::query::{
//!     ListQuery, MatchStrategy, PageSize, QueryProfile, QueryRequest, Queryable, query_page,
//! };
//!
//! struct Row(&'static str);
//! impl Queryable for Row {
//!     fn field(&self, name: &str) -> Option<Cow<'_, str>> {
//!         (name == "name").then(|| Cow::Borrowed(self.0))
//!     }
//! }
//!
//! const PROFILE: QueryProfile = QueryProfile {
//!     searchable: &["name"],
//!     sortable: &["name"],
//!     strategy: MatchStrategy::Substring,
//!     default_page_size: PageSize::Unbounded,
//!     default_sort: None,
//! };
//!
//! let params = ListQuery { sort: Some("name:desc".into()), ..Default::default() };
//! let request = QueryRequest::from_params(&params, &PROFILE);
//! let page = query_page(vec![Row("a"), Row("c"), Row("b")], &request, &PROFILE, |r| r.0);
//! assert_eq!(page.data, vec!["c", "b", "a"]);
//! ```

use std::borrow::Cow;
use std::str::FromStr;

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

// ============================================================================
// Request
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Limited(usize),
    /// Every row on one page
    Unbounded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    /// `field:direction`; anything else is `None`
    pub fn parse(raw: &str) -> Option<Self> {
        let (field, direction) = raw.split_once(':')?;
        let field = field.trim();
        if field.is_empty() {
            return None;
        }
        Some(Self {
            field: field.to_owned(),
            direction: direction.trim().parse().ok()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    pub field: String,
    pub value: String,
}

impl SearchTerm {
    /// `field:value`, split on the first colon. Both halves must be non-empty.
    pub fn parse(raw: &str) -> Option<Self> {
        let (field, value) = raw.split_once(':')?;
        let field = field.trim();
        if field.is_empty() || value.is_empty() {
            return None;
        }
        Some(Self {
            field: field.to_owned(),
            value: value.to_owned(),
        })
    }
}

/// Raw list parameters as they arrive in the query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page_number: Option<String>,
    pub page_size: Option<String>,
    pub sort: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    /// May be below 1; such a page is simply empty.
    pub page_number: i64,
    pub page_size: PageSize,
    pub sort: Option<SortSpec>,
    pub search: Option<SearchTerm>,
}

impl QueryRequest {
    /// Lenient parse: bad numbers fall back to defaults, malformed
    /// `sort`/`search` are dropped.
    pub fn from_params(params: &ListQuery, profile: &QueryProfile) -> Self {
        let page_number = params
            .page_number
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|&n| n != 0)
            .unwrap_or(1);

        let page_size = params
            .page_size
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|&n| n >= 1)
            .map(|n| PageSize::Limited(usize::try_from(n).unwrap_or(usize::MAX)))
            .unwrap_or(profile.default_page_size);

        let sort = match params.sort.as_deref() {
            Some(raw) => SortSpec::parse(raw),
            None => profile.default_sort.and_then(SortSpec::parse),
        };

        let search = params.search.as_deref().and_then(SearchTerm::parse);

        if params.sort.is_some() && sort.is_none() {
            tracing::debug!(sort = ?params.sort, "Ignoring malformed sort parameter");
        }
        if params.search.as_deref().is_some_and(|s| !s.is_empty()) && search.is_none() {
            tracing::debug!(search = ?params.search, "Ignoring malformed search parameter");
        }

        Self {
            page_number,
            page_size,
            sort,
            search,
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Case-insensitive substring
    Substring,
    /// Case-insensitive regular-expression search
    Regex,
}

/// Per-resource configuration of the engine
#[derive(Debug, Clone, Copy)]
pub struct QueryProfile {
    pub searchable: &'static [&'static str],
    pub sortable: &'static [&'static str],
    pub strategy: MatchStrategy,
    pub default_page_size: PageSize,
    /// `field:direction`, applied when the request carries no `sort`
    pub default_sort: Option<&'static str>,
}

/// Field access for filtering and sorting. `None` means the record has no
/// such field.
pub trait Queryable {
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;
}

// ============================================================================
// Result
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub page_number: i64,
    pub page_size: usize,
    pub count: usize,
    pub total_pages: usize,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub data: Vec<T>,
}

// ============================================================================
// Pipeline
// ============================================================================

pub fn query_page<R, T, F>(
    records: Vec<R>,
    request: &QueryRequest,
    profile: &QueryProfile,
    project: F,
) -> PageResult<T>
where
    R: Queryable,
    F: FnMut(R) -> T,
{
    let mut records = filter(records, request.search.as_ref(), profile);
    if let Some(sort) = request.sort.as_ref() {
        sort_records(&mut records, sort, profile);
    }
    paginate(records, request.page_number, request.page_size, project)
}

fn filter<R: Queryable>(
    records: Vec<R>,
    search: Option<&SearchTerm>,
    profile: &QueryProfile,
) -> Vec<R> {
    let Some(term) = search else {
        return records;
    };
    if !profile.searchable.contains(&term.field.as_str()) {
        tracing::debug!(field = %term.field, "Search on non-searchable field ignored");
        return records;
    }

    let field = term.field.as_str();
    match profile.strategy {
        MatchStrategy::Substring => {
            let needle = term.value.to_lowercase();
            records
                .into_iter()
                .filter(|r| {
                    r.field(field)
                        .is_some_and(|v| v.to_lowercase().contains(&needle))
                })
                .collect()
        }
        MatchStrategy::Regex => {
            let pattern = match RegexBuilder::new(&term.value)
                .case_insensitive(true)
                .build()
            {
                Ok(pattern) => pattern,
                Err(err) => {
                    tracing::debug!(error = %err, "Invalid search pattern ignored");
                    return records;
                }
            };
            records
                .into_iter()
                .filter(|r| r.field(field).is_some_and(|v| pattern.is_match(&v)))
                .collect()
        }
    }
}

fn sort_records<R: Queryable>(records: &mut Vec<R>, sort: &SortSpec, profile: &QueryProfile) {
    if !profile.sortable.contains(&sort.field.as_str()) {
        tracing::debug!(field = %sort.field, "Sort on non-sortable field ignored");
        return;
    }

    let mut keyed: Vec<(String, R)> = records
        .drain(..)
        .map(|r| {
            let key = r
                .field(&sort.field)
                .map(|v| v.to_lowercase())
                .unwrap_or_default();
            (key, r)
        })
        .collect();

    // sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| match sort.direction {
        SortDirection::Asc => a.cmp(b),
        SortDirection::Desc => b.cmp(a),
    });

    records.extend(keyed.into_iter().map(|(_, r)| r));
}

fn paginate<R, T, F>(records: Vec<R>, page_number: i64, size: PageSize, project: F) -> PageResult<T>
where
    F: FnMut(R) -> T,
{
    let total = records.len();
    let page_size = match size {
        PageSize::Limited(n) => n,
        PageSize::Unbounded => total,
    };
    let total_pages = if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    };

    let (start, end) = if page_number < 1 || page_size == 0 {
        (0, 0)
    } else {
        let page = usize::try_from(page_number).unwrap_or(usize::MAX);
        let start = (page - 1).saturating_mul(page_size);
        let end = page.saturating_mul(page_size).min(total);
        (start, end)
    };

    let data: Vec<T> = if start < end {
        records
            .into_iter()
            .skip(start)
            .take(end - start)
            .map(project)
            .collect()
    } else {
        Vec::new()
    };

    PageResult {
        page_number,
        page_size,
        count: data.len(),
        total_pages,
        has_previous_page: page_number > 1,
        has_next_page: page_number < i64::try_from(total_pages).unwrap_or(i64::MAX),
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: usize,
        product: String,
        quantity: i64,
        note: Option<String>,
    }

    impl Queryable for Item {
        fn field(&self, name: &str) -> Option<Cow<'_, str>> {
            match name {
                "product" => Some(Cow::Borrowed(&self.product)),
                "quantity" => Some(Cow::Owned(self.quantity.to_string())),
                "note" => self.note.as_deref().map(Cow::Borrowed),
                _ => None,
            }
        }
    }

    const SUBSTRING: QueryProfile = QueryProfile {
        searchable: &["product", "note"],
        sortable: &["product", "quantity", "note"],
        strategy: MatchStrategy::Substring,
        default_page_size: PageSize::Unbounded,
        default_sort: None,
    };

    const REGEX: QueryProfile = QueryProfile {
        searchable: &["product", "quantity"],
        sortable: &["product", "quantity"],
        strategy: MatchStrategy::Regex,
        default_page_size: PageSize::Limited(10),
        default_sort: Some("product:asc"),
    };

    fn item(id: usize, product: &str) -> Item {
        Item {
            id,
            product: product.to_owned(),
            quantity: id as i64,
            note: None,
        }
    }

    fn numbered(n: usize) -> Vec<Item> {
        (0..n).map(|i| item(i, &format!("item-{i}"))).collect()
    }

    fn params(pairs: &[(&str, &str)]) -> ListQuery {
        let mut q = ListQuery::default();
        for (k, v) in pairs {
            let v = Some((*v).to_owned());
            match *k {
                "page_number" => q.page_number = v,
                "page_size" => q.page_size = v,
                "sort" => q.sort = v,
                "search" => q.search = v,
                _ => unreachable!(),
            }
        }
        q
    }

    fn ids(page: &PageResult<Item>) -> Vec<usize> {
        page.data.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_second_page_of_twenty_five() {
        let request = QueryRequest {
            page_number: 2,
            page_size: PageSize::Limited(10),
            sort: None,
            search: None,
        };
        let page = query_page(numbered(25), &request, &SUBSTRING, |i| i);

        assert_eq!(page.count, 10);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous_page);
        assert!(page.has_next_page);
        assert_eq!(ids(&page), (10..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_last_partial_page() {
        let request = QueryRequest::from_params(
            &params(&[("page_number", "3"), ("page_size", "10")]),
            &SUBSTRING,
        );
        let page = query_page(numbered(25), &request, &SUBSTRING, |i| i);
        assert_eq!(page.count, 5);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next_page);
        assert_eq!(ids(&page), (20..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_page_beyond_range_is_empty() {
        let request = QueryRequest::from_params(
            &params(&[("page_number", "9"), ("page_size", "10")]),
            &SUBSTRING,
        );
        let page = query_page(numbered(25), &request, &SUBSTRING, |i| i);

        assert_eq!(page.count, 0);
        assert!(page.data.is_empty());
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next_page);
        assert!(page.has_previous_page);
    }

    #[test]
    fn test_negative_page_is_empty_not_error() {
        let request = QueryRequest::from_params(
            &params(&[("page_number", "-1"), ("page_size", "10")]),
            &SUBSTRING,
        );
        assert_eq!(request.page_number, -1);

        let page = query_page(numbered(25), &request, &SUBSTRING, |i| i);
        assert_eq!(page.count, 0);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_previous_page);
    }

    #[test]
    fn test_lenient_number_parsing() {
        let request = QueryRequest::from_params(
            &params(&[("page_number", "abc"), ("page_size", "0")]),
            &REGEX,
        );
        assert_eq!(request.page_number, 1);
        assert_eq!(request.page_size, PageSize::Limited(10));

        let request = QueryRequest::from_params(&params(&[("page_size", "-5")]), &SUBSTRING);
        assert_eq!(request.page_size, PageSize::Unbounded);
    }

    #[test]
    fn test_unbounded_returns_everything() {
        let request = QueryRequest::from_params(&ListQuery::default(), &SUBSTRING);
        let page = query_page(numbered(7), &request, &SUBSTRING, |i| i);
        assert_eq!(page.count, 7);
        assert_eq!(page.page_size, 7);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next_page);

        let empty = query_page(Vec::<Item>::new(), &request, &SUBSTRING, |i| i);
        assert_eq!(empty.total_pages, 0);
        assert_eq!(empty.count, 0);
    }

    #[test]
    fn test_sort_is_stable_and_case_insensitive() {
        let records = vec![
            item(0, "banana"),
            item(1, "Apple"),
            item(2, "apple"),
            item(3, "cherry"),
            item(4, "APPLE"),
        ];

        let asc = QueryRequest::from_params(&params(&[("sort", "product:asc")]), &SUBSTRING);
        let page = query_page(records.clone(), &asc, &SUBSTRING, |i| i);
        assert_eq!(ids(&page), vec![1, 2, 4, 0, 3]);

        let desc = QueryRequest::from_params(&params(&[("sort", "product:DESC")]), &SUBSTRING);
        let page = query_page(records, &desc, &SUBSTRING, |i| i);
        assert_eq!(ids(&page), vec![3, 0, 1, 2, 4]);
    }

    #[test]
    fn test_numeric_fields_sort_lexically() {
        let records = vec![item(2, "a"), item(10, "b"), item(1, "c")];
        let request = QueryRequest::from_params(&params(&[("sort", "quantity:asc")]), &SUBSTRING);
        let page = query_page(records, &request, &SUBSTRING, |i| i);
        assert_eq!(ids(&page), vec![1, 10, 2]);
    }

    #[test]
    fn test_missing_field_sorts_as_empty() {
        let mut noted = item(0, "x");
        noted.note = Some("b".into());
        let records = vec![noted, item(1, "y")];
        let request = QueryRequest::from_params(&params(&[("sort", "note:asc")]), &SUBSTRING);
        let page = query_page(records, &request, &SUBSTRING, |i| i);
        assert_eq!(ids(&page), vec![1, 0]);
    }

    #[test]
    fn test_unsortable_or_malformed_sort_keeps_store_order() {
        let records = vec![item(0, "b"), item(1, "a")];
        for sort in ["id:asc", "product", "product:sideways", ":asc"] {
            let request = QueryRequest::from_params(&params(&[("sort", sort)]), &SUBSTRING);
            let page = query_page(records.clone(), &request, &SUBSTRING, |i| i);
            assert_eq!(ids(&page), vec![0, 1], "sort={sort}");
        }
    }

    #[test]
    fn test_default_sort_applies_when_absent() {
        let records = vec![item(0, "pear"), item(1, "fig")];
        let request = QueryRequest::from_params(&ListQuery::default(), &REGEX);
        let page = query_page(records, &request, &REGEX, |i| i);
        assert_eq!(ids(&page), vec![1, 0]);
    }

    #[test]
    fn test_substring_search() {
        let records = vec![item(0, "Blue Widget"), item(1, "red gadget"), item(2, "widgetry")];
        let request =
            QueryRequest::from_params(&params(&[("search", "product:WIDGET")]), &SUBSTRING);
        let page = query_page(records.clone(), &request, &SUBSTRING, |i| i);
        assert_eq!(ids(&page), vec![0, 2]);

        // regex metacharacters are literal here
        let request =
            QueryRequest::from_params(&params(&[("search", "product:^red")]), &SUBSTRING);
        let page = query_page(records, &request, &SUBSTRING, |i| i);
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_regex_search() {
        let records = vec![item(0, "Blue Widget"), item(1, "red gadget"), item(2, "widgetry")];
        let request = QueryRequest::from_params(&params(&[("search", "product:^wid")]), &REGEX);
        let page = query_page(records, &request, &REGEX, |i| i);
        assert_eq!(ids(&page), vec![2]);
    }

    #[test]
    fn test_regex_search_on_numeric_field() {
        let request = QueryRequest::from_params(&params(&[("search", "quantity:^1")]), &REGEX);
        let page = query_page(numbered(25), &request, &REGEX, |i| i);
        // 1, 10..=19 sorted by product
        assert_eq!(page.count, 10);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_malformed_search_disables_filtering() {
        for search in ["product", "product:", ":widget", "unknown:widget", "product:(["] {
            let request = QueryRequest::from_params(&params(&[("search", search)]), &REGEX);
            let page = query_page(numbered(3), &request, &REGEX, |i| i);
            assert_eq!(page.count, 3, "search={search}");
        }
    }

    #[test]
    fn test_search_value_may_contain_colons() {
        let term = SearchTerm::parse("product:a:b").unwrap();
        assert_eq!(term.field, "product");
        assert_eq!(term.value, "a:b");

        let records = vec![item(0, "a:b"), item(1, "ab")];
        let request = QueryRequest::from_params(&params(&[("search", "product:a:b")]), &SUBSTRING);
        let page = query_page(records, &request, &SUBSTRING, |i| i);
        assert_eq!(ids(&page), vec![0]);
    }

    #[test]
    fn test_missing_field_is_absent_for_filtering() {
        let mut noted = item(0, "x");
        noted.note = Some("gift wrap".into());
        let records = vec![noted, item(1, "y")];
        let request = QueryRequest::from_params(&params(&[("search", "note:gift")]), &SUBSTRING);
        let page = query_page(records, &request, &SUBSTRING, |i| i);
        assert_eq!(ids(&page), vec![0]);
    }

    #[test]
    fn test_page_result_json_shape() {
        let request = QueryRequest::from_params(&params(&[("page_size", "2")]), &SUBSTRING);
        let page = query_page(numbered(3), &request, &SUBSTRING, |i| i.id);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pageNumber": 1,
                "pageSize": 2,
                "count": 2,
                "totalPages": 2,
                "hasPreviousPage": false,
                "hasNextPage": true,
                "data": [0, 1]
            })
        );
    }
}
