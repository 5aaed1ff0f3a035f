use anyhow::Result;

use crate::db::paging::PagedList;
use crate::db::provider::DataProvider;
use crate::db::session::SqlSession;
use crate::model::Student;
use crate::services::entities_from;

const SELECT: &str = "SELECT ID, FIRST_NAME, LAST_NAME, CITY_ID FROM STUDENT";

/// Thin pass-through queries over the student table.
pub struct StudentService<'a, P: DataProvider> {
    provider: &'a P,
}

impl<'a, P: DataProvider> StudentService<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    pub fn list(&self) -> Result<Vec<Student>> {
        let session = self.provider.create_connection(None)?;
        let set = session.query(&format!("{} ORDER BY ID", SELECT))?;
        entities_from(&set)
    }

    pub fn by_id(&self, id: i64) -> Result<Option<Student>> {
        let session = self.provider.create_connection(None)?;
        let set = session.query(&format!("{} WHERE ID = {}", SELECT, id))?;
        Ok(entities_from(&set)?.into_iter().next())
    }

    pub fn paged(&self, page_index: usize, page_size: usize) -> Result<PagedList<Student>> {
        let students = self.list()?;
        PagedList::from_source(&students, page_index, page_size)
    }

    /// Next identity value for the student table. Consuming read.
    pub fn next_id(&self) -> Result<i64> {
        self.provider.table_identity::<Student>()
    }
}
