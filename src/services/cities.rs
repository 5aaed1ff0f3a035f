use anyhow::Result;

use crate::db::paging::PagedList;
use crate::db::provider::DataProvider;
use crate::db::session::SqlSession;
use crate::model::City;
use crate::services::entities_from;

const SELECT: &str = "SELECT ID, NAME, COUNTRY_ID FROM CITY";

pub struct CityService<'a, P: DataProvider> {
    provider: &'a P,
}

impl<'a, P: DataProvider> CityService<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    pub fn list(&self) -> Result<Vec<City>> {
        let session = self.provider.create_connection(None)?;
        let set = session.query(&format!("{} ORDER BY ID", SELECT))?;
        entities_from(&set)
    }

    pub fn by_id(&self, id: i64) -> Result<Option<City>> {
        let session = self.provider.create_connection(None)?;
        let set = session.query(&format!("{} WHERE ID = {}", SELECT, id))?;
        Ok(entities_from(&set)?.into_iter().next())
    }

    pub fn paged(&self, page_index: usize, page_size: usize) -> Result<PagedList<City>> {
        let cities = self.list()?;
        PagedList::from_source(&cities, page_index, page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::types::Value;
    use crate::services::testing::{result_set, CannedProvider};

    #[test]
    fn lists_cities_with_optional_country() {
        let provider = CannedProvider::with_sets(vec![result_set(
            &["ID", "NAME", "COUNTRY_ID"],
            vec![
                vec![Value::Int(1), Value::Text("Oslo".to_string()), Value::Int(3)],
                vec![Value::Int(2), Value::Text("Atlantis".to_string()), Value::Null],
            ],
        )]);
        let service = CityService::new(&provider);

        let cities = service.list().unwrap();
        assert_eq!(cities[0].country_id, Some(3));
        assert_eq!(cities[1].country_id, None);
    }
}
