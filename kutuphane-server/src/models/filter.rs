//! List filters - optional case-insensitive substring predicates
//!
//! Query parameters: `ulke` (country), `sehir` (city), `kutuphane` (library name).
//! Blank values impose no predicate. A repeated key keeps its first value and
//! unknown keys are ignored.

use sqlx::{Postgres, QueryBuilder};

/// Columns a filter applies to in a given list query.
#[derive(Debug, Clone, Copy)]
pub struct FilterColumns {
    pub country: &'static str,
    pub city: &'static str,
    /// `None` when the query has no library-name filter.
    pub library: Option<&'static str>,
}

impl FilterColumns {
    /// Country and city only (library listing).
    pub const LOCATION: Self = Self {
        country: "loc.country",
        city: "loc.city",
        library: None,
    };

    /// Country, city and library name (staff, sponsor, visitor listings).
    pub const LOCATION_AND_LIBRARY: Self = Self {
        country: "loc.country",
        city: "loc.city",
        library: Some("l.name"),
    };
}

/// Filter for the `getir` endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub country: Option<String>,
    pub city: Option<String>,
    pub library: Option<String>,
}

impl ListFilter {
    /// Build a filter from decoded query-string pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "ulke" => &mut filter.country,
                "sehir" => &mut filter.city,
                "kutuphane" => &mut filter.library,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        filter
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_library(mut self, library: impl Into<String>) -> Self {
        self.library = Some(library.into());
        self
    }

    /// Active `(column, LIKE pattern)` pairs, in a fixed order.
    pub fn predicates(&self, columns: FilterColumns) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(value) = non_blank(&self.country) {
            out.push((columns.country, like_pattern(value)));
        }
        if let Some(value) = non_blank(&self.city) {
            out.push((columns.city, like_pattern(value)));
        }
        if let (Some(column), Some(value)) = (columns.library, non_blank(&self.library)) {
            out.push((column, like_pattern(value)));
        }
        out
    }

    /// Append a `WHERE` clause (if any predicate is active) to `qb`.
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>, columns: FilterColumns) {
        for (i, (column, pattern)) in self.predicates(columns).into_iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            qb.push("LOWER(")
                .push(column)
                .push(") LIKE LOWER(")
                .push_bind(pattern)
                .push(") ESCAPE '\\'");
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Wrap `value` in `%...%`, escaping LIKE metacharacters so it matches literally.
pub fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("ankara"), "%ankara%");
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\x"), "%c:\\\\x%");
    }

    #[test]
    fn empty_filter_has_no_predicates() {
        let filter = ListFilter::default();
        assert!(filter.predicates(FilterColumns::LOCATION_AND_LIBRARY).is_empty());
    }

    #[test]
    fn blank_values_are_ignored() {
        let filter = ListFilter::default().with_country("").with_city("   ");
        assert!(filter.predicates(FilterColumns::LOCATION).is_empty());
    }

    #[test]
    fn library_filter_ignored_without_column() {
        let filter = ListFilter::default().with_library("Merkez");
        assert!(filter.predicates(FilterColumns::LOCATION).is_empty());
        assert_eq!(
            filter.predicates(FilterColumns::LOCATION_AND_LIBRARY),
            vec![("l.name", "%Merkez%".to_string())]
        );
    }

    #[test]
    fn push_where_without_predicates_leaves_sql_untouched() {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT 1 FROM location loc");
        ListFilter::default().push_where(&mut qb, FilterColumns::LOCATION);
        assert_eq!(qb.sql(), "SELECT 1 FROM location loc");
    }

    #[test]
    fn push_where_joins_with_and() {
        let filter = ListFilter::default()
            .with_country("türk")
            .with_city("ank")
            .with_library("milli");
        let mut qb = QueryBuilder::<Postgres>::new("SELECT 1 FROM t");
        filter.push_where(&mut qb, FilterColumns::LOCATION_AND_LIBRARY);
        assert_eq!(
            qb.sql(),
            "SELECT 1 FROM t \
             WHERE LOWER(loc.country) LIKE LOWER($1) ESCAPE '\\' \
             AND LOWER(loc.city) LIKE LOWER($2) ESCAPE '\\' \
             AND LOWER(l.name) LIKE LOWER($3) ESCAPE '\\'"
        );
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn reads_turkish_query_keys() {
        let filter = ListFilter::from_pairs(pairs(&[("ulke", "Türkiye"), ("sehir", "Ankara")]));
        assert_eq!(filter.country.as_deref(), Some("Türkiye"));
        assert_eq!(filter.city.as_deref(), Some("Ankara"));
        assert_eq!(filter.library, None);
    }

    #[test]
    fn repeated_key_keeps_first_value() {
        let filter = ListFilter::from_pairs(pairs(&[
            ("kutuphane", "Milli"),
            ("sayfa", "2"),
            ("kutuphane", "Merkez"),
        ]));
        assert_eq!(filter, ListFilter::default().with_library("Milli"));
    }
}
