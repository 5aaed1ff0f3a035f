mod cities;
mod countries;
mod students;

pub use cities::CityService;
pub use countries::CountryService;
pub use students::StudentService;

use anyhow::Result;

use crate::db::types::ResultSet;
use crate::model::Entity;

fn entities_from<E: Entity>(set: &ResultSet) -> Result<Vec<E>> {
    set.rows.iter().map(|row| E::from_row(set, row)).collect()
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use anyhow::{anyhow, Result};

    use crate::db::provider::DataProvider;
    use crate::db::session::SqlSession;
    use crate::db::types::{Column, ResultSet, Value};
    use crate::model::Entity;

    type Queue = Rc<RefCell<VecDeque<ResultSet>>>;

    pub struct CannedSession {
        sets: Queue,
        queries: Rc<RefCell<Vec<String>>>,
    }

    impl SqlSession for CannedSession {
        fn execute(&self, _sql: &str) -> Result<u64> {
            Ok(0)
        }

        fn query(&self, sql: &str) -> Result<ResultSet> {
            self.queries.borrow_mut().push(sql.to_string());
            self.sets
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| anyhow!("no canned result set left for: {}", sql))
        }
    }

    /// Provider whose sessions replay canned result sets, in order.
    pub struct CannedProvider {
        sets: Queue,
        queries: Rc<RefCell<Vec<String>>>,
    }

    impl CannedProvider {
        pub fn with_sets(sets: Vec<ResultSet>) -> Self {
            Self {
                sets: Rc::new(RefCell::new(sets.into())),
                queries: Rc::default(),
            }
        }

        pub fn queries(&self) -> Vec<String> {
            self.queries.borrow().clone()
        }
    }

    impl DataProvider for CannedProvider {
        type Session = CannedSession;

        fn create_connection(&self, _connection_string: Option<&str>) -> Result<CannedSession> {
            Ok(CannedSession {
                sets: Rc::clone(&self.sets),
                queries: Rc::clone(&self.queries),
            })
        }

        fn database_exists(&self) -> bool {
            true
        }

        fn create_database(&self, _collation: Option<&str>, _tries: u32) -> Result<()> {
            Ok(())
        }

        fn execute_script(&self, _sql: &str) -> Result<()> {
            Ok(())
        }

        fn table_identity<E: Entity>(&self) -> Result<i64> {
            Ok(1)
        }

        fn set_table_identity<E: Entity>(&self, _ident: i64) -> Result<()> {
            Ok(())
        }

        fn backup_database(&self, _file_name: &str) -> Result<()> {
            Ok(())
        }

        fn restore_database(&self, _backup_file_name: &str) -> Result<()> {
            Ok(())
        }

        fn reindex_tables(&self) -> Result<()> {
            Ok(())
        }
    }

    pub fn result_set(columns: &[&str], rows: Vec<Vec<Value>>) -> ResultSet {
        ResultSet {
            columns: columns
                .iter()
                .map(|name| Column {
                    name: (*name).to_string(),
                })
                .collect(),
            rows,
        }
    }
}
