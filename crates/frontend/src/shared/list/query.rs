use super::filter_set::FilterSet;

/// One partition of a list (e.g. Completed / Draft) with the query fragment
/// it adds.
#[derive(Debug, Clone, PartialEq)]
pub struct ListTab {
    pub label: &'static str,
    pub fragment: &'static str,
}

impl ListTab {
    pub const fn new(label: &'static str, fragment: &'static str) -> Self {
        Self { label, fragment }
    }
}

/// Append a `k=v&...` fragment to a URL that may already have a query.
pub fn append_query(endpoint: &str, fragment: &str) -> String {
    let fragment = fragment.trim_start_matches(['&', '?']);
    if fragment.is_empty() {
        return endpoint.to_string();
    }
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{separator}{fragment}")
}

/// Everything that determines which page of a collection is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub endpoint: String,
    pub offset: usize,
    pub limit: usize,
    pub tab_fragment: String,
    pub filters: FilterSet,
}

impl ListQuery {
    pub fn new(endpoint: impl Into<String>, limit: usize) -> Self {
        Self {
            endpoint: endpoint.into(),
            offset: 0,
            limit,
            tab_fragment: String::new(),
            filters: FilterSet::new(),
        }
    }

    /// `<endpoint>?offset=&limit=&<tab>&<filters>`; endpoints that already
    /// carry a query string are extended with `&`.
    pub fn url(&self) -> String {
        let paging = format!("offset={}&limit={}", self.offset, self.limit);
        [self.tab_fragment.clone(), self.filters.serialize()]
            .iter()
            .fold(append_query(&self.endpoint, &paging), |url, fragment| {
                append_query(&url, fragment)
            })
    }

    /// Switching tab swaps the fragment and returns to the first page.
    pub fn select_tab(&mut self, tab: &ListTab) {
        self.tab_fragment = tab.fragment.to_string();
        self.offset = 0;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.offset = page * self.limit;
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(1);
        self.offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::filter_set::{Comparator, Filter};

    const DRAFT: ListTab = ListTab::new("Draft", "fieldname=statusFlags&fieldvalue=INCOMPLETE");

    #[test]
    fn test_append_query() {
        assert_eq!(append_query("/Forms.paginate", "a=1"), "/Forms.paginate?a=1");
        assert_eq!(append_query("/Forms.paginate?a=1", "&b=2"), "/Forms.paginate?a=1&b=2");
        assert_eq!(append_query("/Forms.paginate", ""), "/Forms.paginate");
    }

    #[test]
    fn test_url_extends_existing_query() {
        let query = ListQuery::new("/Forms.paginate?descending=true", 10);
        assert_eq!(query.url(), "/Forms.paginate?descending=true&offset=0&limit=10");
    }

    #[test]
    fn test_url_with_tab_and_filters() {
        let mut query = ListQuery::new("/Forms.paginate", 25);
        query.go_to_page(2);
        query.select_tab(&DRAFT);
        assert_eq!(query.offset, 0);
        query.go_to_page(1);
        query
            .filters
            .add(Filter::new("jcr:createdBy", Comparator::Equals, "admin"));
        assert_eq!(
            query.url(),
            "/Forms.paginate?offset=25&limit=25\
             &fieldname=statusFlags&fieldvalue=INCOMPLETE\
             &filternames=jcr%3AcreatedBy&filtervalues=admin&filtercomparators=%3D"
        );
    }

    #[test]
    fn test_select_tab_keeps_filters_and_limit() {
        let mut query = ListQuery::new("/Forms.paginate", 10);
        query
            .filters
            .add(Filter::new("jcr:createdBy", Comparator::Equals, "admin"));
        query.set_limit(50);
        query.go_to_page(2);
        query.select_tab(&DRAFT);
        assert_eq!(query.limit, 50);
        assert_eq!(
            query.url(),
            "/Forms.paginate?offset=0&limit=50\
             &fieldname=statusFlags&fieldvalue=INCOMPLETE\
             &filternames=jcr%3AcreatedBy&filtervalues=admin&filtercomparators=%3D"
        );
    }

    #[test]
    fn test_limit_change_resets_offset() {
        let mut query = ListQuery::new("/Forms.paginate", 10);
        query.go_to_page(3);
        query.set_limit(50);
        assert_eq!(query.offset, 0);
        assert_eq!(query.limit, 50);
    }
}
