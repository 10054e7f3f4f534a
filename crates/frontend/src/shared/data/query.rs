//! Query builder for the row-store REST dialect.
//!
//! Filters follow the `column=op.value` convention, embedded parent rows
//! are requested through the projection (`*, courses(*, subject(*))`),
//! and multi-column search goes through an `or=(...)` disjunction.

/// Single-column filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq(String, String),
    /// Case-insensitive substring match; the needle is wrapped in wildcards.
    ILike(String, String),
}

#[derive(Debug, Clone, Default)]
pub struct SelectQuery {
    table: String,
    columns: String,
    filters: Vec<Filter>,
    or_ilike: Option<(Vec<String>, String)>,
    order: Option<(String, bool)>,
    limit: Option<u32>,
}

impl SelectQuery {
    pub fn table(table: &str) -> Self {
        Self {
            table: table.to_string(),
            columns: "*".to_string(),
            ..Default::default()
        }
    }

    /// Column projection. Spaces are stripped so callers can write the
    /// readable `"*, courses(*, subject(*))"` form.
    pub fn columns(mut self, columns: &str) -> Self {
        self.columns = columns.replace(' ', "");
        self
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push(Filter::Eq(column.to_string(), value.to_string()));
        self
    }

    pub fn ilike(mut self, column: &str, needle: &str) -> Self {
        self.filters
            .push(Filter::ILike(column.to_string(), needle.to_string()));
        self
    }

    /// Substring match over any of `columns`. Replaces a previous group.
    pub fn or_ilike(mut self, columns: &[&str], needle: &str) -> Self {
        self.or_ilike = Some((
            columns.iter().map(|c| c.to_string()).collect(),
            needle.to_string(),
        ));
        self
    }

    pub fn order_asc(mut self, column: &str) -> Self {
        self.order = Some((column.to_string(), true));
        self
    }

    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some((column.to_string(), false));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Renders the query-string part after `?`, always starting with the
    /// projection so built URLs stay predictable in logs.
    pub fn query_string(&self) -> String {
        let mut params = format!("select={}", self.columns);

        for filter in &self.filters {
            match filter {
                Filter::Eq(column, value) => {
                    params += &format!("&{}=eq.{}", column, urlencoding::encode(value));
                }
                Filter::ILike(column, needle) => {
                    params += &format!("&{}=ilike.*{}*", column, urlencoding::encode(needle));
                }
            }
        }

        if let Some((columns, needle)) = &self.or_ilike {
            let encoded = urlencoding::encode(needle);
            let parts: Vec<String> = columns
                .iter()
                .map(|c| format!("{}.ilike.*{}*", c, encoded))
                .collect();
            params += &format!("&or=({})", parts.join(","));
        }

        if let Some((column, ascending)) = &self.order {
            params += &format!(
                "&order={}.{}",
                column,
                if *ascending { "asc" } else { "desc" }
            );
        }

        if let Some(limit) = self.limit {
            params += &format!("&limit={}", limit);
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_star_projection() {
        let q = SelectQuery::table("branch");
        assert_eq!(q.query_string(), "select=*");
    }

    #[test]
    fn test_projection_spaces_are_stripped() {
        let q = SelectQuery::table("programs").columns("*, courses(*, subject(*))");
        assert_eq!(q.query_string(), "select=*,courses(*,subject(*))");
    }

    #[test]
    fn test_ilike_wraps_needle_in_wildcards() {
        let q = SelectQuery::table("students").ilike("student_name", "bio");
        assert_eq!(q.query_string(), "select=*&student_name=ilike.*bio*");
    }

    #[test]
    fn test_or_group_spans_all_columns() {
        let q = SelectQuery::table("syllabus_view").or_ilike(
            &["subject_name", "program_name", "course_name"],
            "math",
        );
        assert_eq!(
            q.query_string(),
            "select=*&or=(subject_name.ilike.*math*,program_name.ilike.*math*,course_name.ilike.*math*)"
        );
    }

    #[test]
    fn test_needle_is_percent_encoded() {
        let q = SelectQuery::table("courses").ilike("course_name", "c & d");
        assert_eq!(q.query_string(), "select=*&course_name=ilike.*c%20%26%20d*");
    }

    #[test]
    fn test_eq_order_and_limit() {
        let q = SelectQuery::table("branch")
            .columns("is_primary")
            .eq("id", 7)
            .order_asc("id")
            .limit(1);
        assert_eq!(
            q.query_string(),
            "select=is_primary&id=eq.7&order=id.asc&limit=1"
        );
    }

    #[test]
    fn test_empty_search_renders_empty_wildcards() {
        // An empty needle still matches every row, mirroring a cleared
        // search box going back to the unfiltered list.
        let q = SelectQuery::table("employees").or_ilike(&["first_name", "last_name"], "");
        assert_eq!(
            q.query_string(),
            "select=*&or=(first_name.ilike.**,last_name.ilike.**)"
        );
    }
}
