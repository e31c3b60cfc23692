//! Sample data for local development.
//!
//! Rows are only inserted when no live row with the same natural key
//! (material name, username) exists, so running the seed twice is a no-op.

use sea_orm::{ConnectionTrait, DbErr};

const SEED_MATERIALS: &str = r#"
INSERT INTO materials (name, description, quantity, unit)
SELECT v.name, v.description, v.quantity, v.unit
FROM (VALUES
    ('Material A', 'Description for Material A', 100, 'pcs'),
    ('Material B', 'Description for Material B', 200, 'pcs')
) AS v(name, description, quantity, unit)
WHERE NOT EXISTS (
    SELECT 1 FROM materials m WHERE m.name = v.name AND m.deleted_at IS NULL
)
"#;

const SEED_USERS: &str = r#"
INSERT INTO users (username, first_name, last_name, phone, department, role)
SELECT v.username, v.first_name, v.last_name, v.phone, v.department, v.role
FROM (VALUES
    ('admin1', 'John', 'Doe', '1234567890', 'Engineering', 'admin'),
    ('admin2', 'Jane', 'Doe', '0987654321', 'Marketing', 'admin')
) AS v(username, first_name, last_name, phone, department, role)
WHERE NOT EXISTS (
    SELECT 1 FROM users u WHERE u.username = v.username AND u.deleted_at IS NULL
)
"#;

/// Rows inserted by one [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub materials: u64,
    pub users: u64,
}

/// Inserts the sample materials and users that are not present yet.
pub async fn run<C: ConnectionTrait>(db: &C) -> Result<SeedReport, DbErr> {
    let materials = db.execute_unprepared(SEED_MATERIALS).await?.rows_affected();
    let users = db.execute_unprepared(SEED_USERS).await?.rows_affected();

    Ok(SeedReport { materials, users })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_reports_inserted_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(2), exec(2)])
            .into_connection();

        let report = run(&db).await.unwrap();
        assert_eq!(report, SeedReport { materials: 2, users: 2 });
    }

    #[tokio::test]
    async fn test_second_run_inserts_nothing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(0), exec(0)])
            .into_connection();

        assert_eq!(run(&db).await.unwrap(), SeedReport::default());
    }

    #[test]
    fn test_seed_statements_skip_live_duplicates() {
        assert!(SEED_MATERIALS.contains("m.deleted_at IS NULL"));
        assert!(SEED_USERS.contains("u.deleted_at IS NULL"));
    }
}
