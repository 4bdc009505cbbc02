use sqlx::{
    postgres::{PgArguments, PgRow},
    query::QueryAs,
    Postgres,
};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq)]
pub enum SqlxBinds {
    String(String),
    Bool(bool),
    Uuid(Uuid),
}

pub fn binds_query_as<'a, T: for<'r> sqlx::FromRow<'r, PgRow>>(
    stmt: &'a str,
    binds: Vec<SqlxBinds>,
) -> QueryAs<'a, Postgres, T, PgArguments> {
    let mut q: QueryAs<'_, Postgres, T, PgArguments> = sqlx::query_as(stmt);
    for bind in binds {
        q = match bind {
            SqlxBinds::String(val) => q.bind(val),
            SqlxBinds::Bool(val) => q.bind(val),
            SqlxBinds::Uuid(val) => q.bind(val),
        };
    }
    q
}

/// Positional `WHERE` clauses and their binds, numbered as they are pushed.
#[derive(Clone, Debug, Default)]
pub struct Filters {
    pub clauses: Vec<String>,
    pub binds: Vec<SqlxBinds>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// `column op $n` where `$n` is the bind slot of `value`
    pub fn push(&mut self, column: &str, op: &str, value: SqlxBinds) {
        self.binds.push(value);
        self.clauses
            .push(format!("{} {} ${}", column, op, self.binds.len()));
    }
}

pub fn query_builder(
    select: Option<&str>,
    table_name: &str,
    wheres: &[String],
    order_by: &[&str],
    limit: Option<u32>,
) -> String {
    let mut stmt = format!("SELECT {} FROM {}", select.unwrap_or("*"), table_name);
    if !wheres.is_empty() {
        stmt.push_str(" WHERE ");
        stmt.push_str(&wheres.join(" AND "));
    }
    if !order_by.is_empty() {
        stmt.push_str(" ORDER BY ");
        stmt.push_str(&order_by.join(", "));
    }
    if let Some(limit) = limit {
        stmt.push_str(&format!(" LIMIT {}", limit));
    }
    stmt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builder_plain() {
        let stmt = query_builder(None, "public.projects", &[], &[], None);
        assert_eq!(stmt, "SELECT * FROM public.projects");
    }

    #[test]
    fn test_query_builder_with_filters() {
        let mut filters = Filters::new();
        filters.push("category", "=", SqlxBinds::String("branding".to_string()));
        filters.push("featured", "=", SqlxBinds::Bool(true));
        let stmt = query_builder(
            Some("count(id)"),
            "public.projects",
            &filters.clauses,
            &["created_at DESC", "title ASC"],
            Some(3),
        );
        assert_eq!(
            stmt,
            "SELECT count(id) FROM public.projects WHERE category = $1 AND featured = $2 \
             ORDER BY created_at DESC, title ASC LIMIT 3"
        );
        assert_eq!(filters.binds.len(), 2);
        assert_eq!(filters.binds[1], SqlxBinds::Bool(true));
    }
}
