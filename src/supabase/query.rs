/// Sort direction for an `order=` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn as_suffix(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// A read-only PostgREST query against one collection.
///
/// Built fluently, mirroring the `from(..).select(..).order(..)` chain of
/// the hosted client libraries:
///
/// ```
/// use clubsite::supabase::{Direction, Query};
///
/// let q = Query::table("events").select("*").order("date", Direction::Ascending);
/// assert_eq!(q.cache_key(), "events?select=*&order=date.asc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    collection: String,
    columns: String,
    order: Option<(String, Direction)>,
    filters: Vec<(String, String)>,
    single: bool,
}

impl Query {
    pub fn table(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
            columns: "*".to_string(),
            order: None,
            filters: Vec::new(),
            single: false,
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.columns = columns.to_string();
        self
    }

    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    /// Equality filter (`column=eq.value`). Repeated calls are AND-ed.
    pub fn eq(mut self, column: &str, value: impl Into<String>) -> Self {
        self.filters.push((column.to_string(), value.into()));
        self
    }

    /// Expect at most one row back.
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn expects_single(&self) -> bool {
        self.single
    }

    pub fn filters(&self) -> &[(String, String)] {
        &self.filters
    }

    /// Query-string parameters in PostgREST syntax, in a stable order.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), self.columns.clone())];
        if let Some((column, direction)) = &self.order {
            params.push(("order".to_string(), format!("{column}.{}", direction.as_suffix())));
        }
        for (column, value) in &self.filters {
            params.push((column.clone(), format!("eq.{value}")));
        }
        params
    }

    /// Identifies the query for memoization: collection plus every parameter.
    pub fn cache_key(&self) -> String {
        let params: Vec<String> = self
            .params()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        let mut key = format!("{}?{}", self.collection, params.join("&"));
        if self.single {
            key.push_str("#single");
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selects_everything() {
        let q = Query::table("club_settings");
        assert_eq!(q.params(), vec![("select".to_string(), "*".to_string())]);
        assert!(!q.expects_single());
    }

    #[test]
    fn renders_order_and_filters() {
        let q = Query::table("events")
            .select("id, title")
            .order("date", Direction::Descending)
            .eq("id", "42")
            .single();
        assert_eq!(
            q.params(),
            vec![
                ("select".to_string(), "id, title".to_string()),
                ("order".to_string(), "date.desc".to_string()),
                ("id".to_string(), "eq.42".to_string()),
            ]
        );
        assert!(q.expects_single());
    }

    #[test]
    fn single_row_queries_have_distinct_cache_keys() {
        let many = Query::table("events").eq("id", "1");
        let one = many.clone().single();
        assert_ne!(many.cache_key(), one.cache_key());
    }
}
