use anyhow::Result;

use crate::db::paging::PagedList;
use crate::db::provider::DataProvider;
use crate::db::session::SqlSession;
use crate::model::Country;
use crate::services::entities_from;

const SELECT: &str = "SELECT ID, NAME FROM COUNTRY";

pub struct CountryService<'a, P: DataProvider> {
    provider: &'a P,
}

impl<'a, P: DataProvider> CountryService<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    pub fn list(&self) -> Result<Vec<Country>> {
        let session = self.provider.create_connection(None)?;
        let set = session.query(&format!("{} ORDER BY ID", SELECT))?;
        entities_from(&set)
    }

    pub fn by_id(&self, id: i64) -> Result<Option<Country>> {
        let session = self.provider.create_connection(None)?;
        let set = session.query(&format!("{} WHERE ID = {}", SELECT, id))?;
        Ok(entities_from(&set)?.into_iter().next())
    }

    pub fn paged(&self, page_index: usize, page_size: usize) -> Result<PagedList<Country>> {
        let countries = self.list()?;
        PagedList::from_source(&countries, page_index, page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::types::Value;
    use crate::services::testing::{result_set, CannedProvider};

    #[test]
    fn paged_countries_report_metadata() {
        let rows = (1..=3)
            .map(|id| vec![Value::Int(id), Value::Text(format!("C{}", id))])
            .collect();
        let provider = CannedProvider::with_sets(vec![result_set(&["ID", "NAME"], rows)]);
        let service = CountryService::new(&provider);

        let page = service.paged(0, 2).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 2);
        assert!(page.has_next_page());
    }
}
