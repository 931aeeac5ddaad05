//! Fuzz target for configuration loading.
//!
//! Tests that CSV parsing and table construction never panic on arbitrary
//! bytes; any outcome other than a clean error or a valid table is a bug.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pan_formatter::config::CsvConfigLoader;
use pan_formatter::defect::DefectList;
use pan_formatter::table::RuleTable;

fuzz_target!(|data: &[u8]| {
    if let Ok(records) = CsvConfigLoader::from_reader(data) {
        let mut sink = DefectList::new();
        if let Ok(table) = RuleTable::from_records(&records, &mut sink) {
            // A built table is never empty
            assert!(table.len() > 0);
        }
    }
});
