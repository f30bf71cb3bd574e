//! Apartment registry operations.

use super::model::{Apartment, BuildingData, Resident};
use crate::error::{RecordError, RecordResult, StorageResult};
use crate::storage::JsonStore;
use tracing::{info, warn};

/// All apartments of one building.
pub struct Building {
    store: JsonStore<BuildingData>,
}

impl Building {
    pub fn new(store: JsonStore<BuildingData>) -> Self {
        Self { store }
    }

    /// Register an apartment, replacing any apartment with the same number.
    ///
    /// Returns the replaced apartment, whose residents are dropped with it.
    pub fn register_apartment(&mut self, apartment: Apartment) -> StorageResult<Option<Apartment>> {
        let num = apartment.num;
        let replaced = self.store.mutate(|d| d.units.insert(num, apartment))?;
        if replaced.is_some() {
            warn!(num, "apartment replaced");
        } else {
            info!(num, "apartment registered");
        }
        Ok(replaced)
    }

    /// Remove an apartment together with its residents.
    pub fn demolish_apartment(&mut self, num: u32) -> StorageResult<Option<Apartment>> {
        let removed = self.store.mutate_if(|d| d.units.remove(&num))?;
        if let Some(apt) = &removed {
            info!(num, residents = apt.occupants.len(), "apartment demolished");
        }
        Ok(removed)
    }

    /// Move a resident into an existing apartment.
    pub fn settle_resident(&mut self, num: u32, resident: Resident) -> RecordResult<()> {
        if !self.store.doc().units.contains_key(&num) {
            return Err(RecordError::not_found("apartment", num));
        }
        info!(num, name = %resident.full_name, "resident settled");
        self.store.mutate(|d| {
            if let Some(apt) = d.units.get_mut(&num) {
                apt.settle(resident);
            }
        })?;
        Ok(())
    }

    /// Evict every resident of apartment `num` named `name`.
    ///
    /// Returns the evicted residents; the file is only rewritten when there were any.
    pub fn evict_resident(&mut self, num: u32, name: &str) -> RecordResult<Vec<Resident>> {
        if !self.store.doc().units.contains_key(&num) {
            return Err(RecordError::not_found("apartment", num));
        }
        let evicted = self
            .store
            .mutate_if(|d| {
                let evicted = d.units.get_mut(&num)?.evict(name);
                (!evicted.is_empty()).then_some(evicted)
            })?
            .unwrap_or_default();
        info!(num, name, count = evicted.len(), "residents evicted");
        Ok(evicted)
    }

    /// Every resident of the building, by ascending apartment number.
    pub fn show_residents(&self) -> Vec<&Resident> {
        self.store
            .doc()
            .units
            .values()
            .flat_map(|apt| apt.occupants.iter())
            .collect()
    }

    /// Every apartment, by ascending number.
    pub fn show_apartments(&self) -> Vec<&Apartment> {
        self.store.doc().units.values().collect()
    }

    pub fn apartment_details(&self, num: u32) -> Option<&Apartment> {
        self.store.doc().units.get(&num)
    }

    pub fn contains(&self, num: u32) -> bool {
        self.store.doc().units.contains_key(&num)
    }

    pub fn data(&self) -> &BuildingData {
        self.store.doc()
    }

    /// Flush and release the backing store.
    pub fn close(self) -> StorageResult<()> {
        self.store.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn building(dir: &tempfile::TempDir) -> Building {
        Building::new(JsonStore::open(dir.path().join("house_data.json")).unwrap())
    }

    #[test]
    fn test_settle_requires_apartment() {
        let dir = tempdir().unwrap();
        let mut house = building(&dir);
        let err = house.settle_resident(3, Resident::new("Ivanov", 40)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_register_replaces_same_number() {
        let dir = tempdir().unwrap();
        let mut house = building(&dir);
        house.register_apartment(Apartment::new(1, 1, "studio")).unwrap();
        house.settle_resident(1, Resident::new("Ivanov", 40)).unwrap();

        let replaced = house
            .register_apartment(Apartment::new(1, 2, "loft"))
            .unwrap()
            .unwrap();
        assert_eq!(replaced.occupants.len(), 1);
        assert_eq!(house.apartment_details(1).unwrap().category, "loft");
        assert!(house.show_residents().is_empty());
    }

    #[test]
    fn test_apartments_listed_by_number() {
        let dir = tempdir().unwrap();
        let mut house = building(&dir);
        for num in [12, 3, 7] {
            house.register_apartment(Apartment::new(num, 0, "x")).unwrap();
        }
        let nums: Vec<u32> = house.show_apartments().iter().map(|a| a.num).collect();
        assert_eq!(nums, vec![3, 7, 12]);
    }

    #[test]
    fn test_evict_unknown_name_is_empty() {
        let dir = tempdir().unwrap();
        let mut house = building(&dir);
        house.register_apartment(Apartment::new(1, 1, "studio")).unwrap();
        assert!(house.evict_resident(1, "Nobody").unwrap().is_empty());
        assert!(house.evict_resident(2, "Nobody").unwrap_err().is_not_found());
    }
}
