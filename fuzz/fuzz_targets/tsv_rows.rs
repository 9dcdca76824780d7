#![no_main]
extern crate syb_tsv;

use libfuzzer_sys::fuzz_target;

use syb_tsv::dsv::Rows;
use syb_tsv::ReaderConfig;

fuzz_target!(|data: &[u8]| {
    let mut rows = Rows::new(data, ReaderConfig::default());

    // Malformed input is expected; only the line count is checked.
    let mut last_line = 0;
    while let Ok(Some(_)) = rows.read_row() {
        assert!(rows.line() > last_line);
        last_line = rows.line();
    }
});
