//! Conjunctive filter set serialized into the collection query string.

use std::fmt;

/// How many times export column identifiers are percent-encoded.
/// The repository decodes them once more than the rest of the path.
pub const DOUBLE_ENCODE_PASSES: usize = 2;

/// Percent-encode `value` `passes` times.
pub fn encode_times(value: &str, passes: usize) -> String {
    let mut out = value.to_string();
    for _ in 0..passes {
        out = urlencoding::encode(&out).into_owned();
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Equals,
    NotEquals,
    LessThan,
    GreaterThan,
    LessOrEqual,
    GreaterOrEqual,
    Contains,
    IsEmpty,
    IsNotEmpty,
}

impl Comparator {
    pub const ALL: [Comparator; 9] = [
        Self::Equals,
        Self::NotEquals,
        Self::LessThan,
        Self::GreaterThan,
        Self::LessOrEqual,
        Self::GreaterOrEqual,
        Self::Contains,
        Self::IsEmpty,
        Self::IsNotEmpty,
    ];

    /// Token understood by the repository's `filtercomparators` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEquals => "<>",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessOrEqual => "<=",
            Self::GreaterOrEqual => ">=",
            Self::Contains => "contains",
            Self::IsEmpty => "is empty",
            Self::IsNotEmpty => "is not empty",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    /// Unary comparators carry no value.
    pub fn takes_value(&self) -> bool {
        !matches!(self, Self::IsEmpty | Self::IsNotEmpty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub comparator: Comparator,
    pub value: String,
}

impl Filter {
    pub fn new(field: impl Into<String>, comparator: Comparator, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            comparator,
            value: value.into(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.comparator.takes_value() {
            write!(f, "{} {} {}", self.field, self.comparator.as_str(), self.value)
        } else {
            write!(f, "{} {}", self.field, self.comparator.as_str())
        }
    }
}

/// Filters combine with AND. Duplicates are legal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    /// Out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) -> Option<Filter> {
        (index < self.filters.len()).then(|| self.filters.remove(index))
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn active_count(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Query fragment without a leading separator; empty when no filters.
    pub fn serialize(&self) -> String {
        self.filters
            .iter()
            .map(|filter| {
                format!(
                    "filternames={}&filtervalues={}&filtercomparators={}",
                    encode_times(&filter.field, 1),
                    encode_times(&filter.value, 1),
                    encode_times(filter.comparator.as_str(), 1),
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_in_insertion_order() {
        let mut set = FilterSet::new();
        set.add(Filter::new("jcr:createdBy", Comparator::Equals, "admin"));
        set.add(Filter::new("age", Comparator::GreaterOrEqual, "18"));
        assert_eq!(
            set.serialize(),
            "filternames=jcr%3AcreatedBy&filtervalues=admin&filtercomparators=%3D\
             &filternames=age&filtervalues=18&filtercomparators=%3E%3D"
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut set = FilterSet::new();
        set.add(Filter::new("a", Comparator::Equals, "1"));
        set.add(Filter::new("a", Comparator::Equals, "1"));
        assert_eq!(set.active_count(), 2);
        assert_eq!(set.serialize().matches("filternames=a").count(), 2);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut set = FilterSet::new();
        set.add(Filter::new("a", Comparator::Equals, "1"));
        assert_eq!(set.remove(5), None);
        assert_eq!(set.active_count(), 1);
        assert!(set.remove(0).is_some());
        assert!(set.is_empty());
        assert_eq!(set.serialize(), "");
    }

    #[test]
    fn test_comparator_tokens_round_trip() {
        for c in Comparator::ALL {
            assert_eq!(Comparator::from_str(c.as_str()), Some(c));
        }
        assert_eq!(Comparator::from_str("~"), None);
    }

    #[test]
    fn test_filter_label() {
        assert_eq!(Filter::new("age", Comparator::LessThan, "5").to_string(), "age < 5");
        assert_eq!(Filter::new("notes", Comparator::IsEmpty, "").to_string(), "notes is empty");
    }
}
