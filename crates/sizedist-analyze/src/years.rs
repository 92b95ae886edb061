//! Modification-year distribution.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Local};

use sizedist_core::Inventory;

/// Bucket the inventory by the local-time calendar year of each file's
/// modification timestamp. Keys iterate in ascending year order.
pub fn by_year(inventory: &Inventory) -> BTreeMap<i32, u64> {
    let mut years: BTreeMap<i32, u64> = BTreeMap::new();
    for record in inventory.iter() {
        let year = DateTime::<Local>::from(record.modified).year();
        *years.entry(year).or_insert(0) += 1;
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use sizedist_core::FileRecord;
    use std::time::SystemTime;

    fn mtime(year: i32) -> SystemTime {
        Local
            .with_ymd_and_hms(year, 6, 15, 12, 0, 0)
            .single()
            .unwrap()
            .into()
    }

    #[test]
    fn test_by_year_buckets() {
        let mut inventory = Inventory::new();
        inventory.push(FileRecord::new("/a", 1, ".txt", mtime(2021)));
        inventory.push(FileRecord::new("/b", 1, ".txt", mtime(2023)));
        inventory.push(FileRecord::new("/c", 1, ".txt", mtime(2023)));

        let years = by_year(&inventory);
        assert_eq!(years.get(&2021), Some(&1));
        assert_eq!(years.get(&2023), Some(&2));
        assert_eq!(years.len(), 2);
    }

    #[test]
    fn test_by_year_ordered_keys() {
        let mut inventory = Inventory::new();
        inventory.push(FileRecord::new("/a", 1, "", mtime(2024)));
        inventory.push(FileRecord::new("/b", 1, "", mtime(2019)));
        inventory.push(FileRecord::new("/c", 1, "", mtime(2022)));

        let years: Vec<i32> = by_year(&inventory).keys().copied().collect();
        assert_eq!(years, vec![2019, 2022, 2024]);
    }

    #[test]
    fn test_by_year_empty() {
        assert!(by_year(&Inventory::new()).is_empty());
    }
}
