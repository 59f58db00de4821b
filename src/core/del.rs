use crate::db::log::{OP_DEL, OP_DEL_MONTH, ttlog_soft};
use crate::db::pool::DbPool;
use crate::db::queries::{delete_month, delete_records};
use crate::errors::AppResult;
use crate::models::YearMonth;
use chrono::NaiveDate;
use std::collections::BTreeSet;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the given days. Days without a record are a no-op.
    /// Returns how many rows were removed.
    pub fn delete_days(pool: &mut DbPool, dates: &[NaiveDate]) -> AppResult<usize> {
        let keys: BTreeSet<String> = dates
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect();

        let deleted = delete_records(&pool.conn, &keys)?;

        if deleted > 0 {
            let target = keys.iter().cloned().collect::<Vec<_>>().join(",");
            ttlog_soft(
                &pool.conn,
                OP_DEL,
                &target,
                &format!("Deleted {} record(s)", deleted),
            );
        }

        Ok(deleted)
    }

    /// Delete every record of one month.
    pub fn delete_month(pool: &mut DbPool, month: YearMonth) -> AppResult<usize> {
        let deleted = pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            let n = delete_month(&tx, month)?;
            tx.commit()?;
            Ok(n)
        })?;

        ttlog_soft(
            &pool.conn,
            OP_DEL_MONTH,
            &month.to_string(),
            &format!("Deleted {} record(s)", deleted),
        );

        Ok(deleted)
    }
}
