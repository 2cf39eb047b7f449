/// Name of the unique constraint guarding `url_mappings.identifier`.
pub const IDENTIFIER_UNIQUE_CONSTRAINT: &str = "url_mappings_identifier_key";

pub fn is_unique_violation_on_identifier(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(IDENTIFIER_UNIQUE_CONSTRAINT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        assert!(!is_unique_violation_on_identifier(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation_on_identifier(&sqlx::Error::PoolTimedOut));
    }
}
