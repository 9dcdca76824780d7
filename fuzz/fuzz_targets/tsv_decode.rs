#![no_main]
extern crate arbitrary;
extern crate syb_tsv;

use libfuzzer_sys::fuzz_target;

use syb_tsv::{record, Reader, ReaderConfigBuilder};

record! {
    #[derive(Debug, Default)]
    pub struct Sample {
        pub name: String => [tsv = "name"],
        pub count: i32 => [tsv = "count,col:1"],
        pub small: u8 => [tsv = ",col:2"],
        pub flag: bool => [tsv = "flag"],
        pub skipped: String => [tsv = "-"],
        hidden: i64 => [tsv = "hidden"],
    }
}

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub separator: char,
    pub lazy_quotes: bool,
    pub trim_leading_space: bool,
    pub data: Box<[u8]>,
}

fuzz_target!(|input: Input| {
    let Ok(config) = ReaderConfigBuilder::default()
        .separator(input.separator)
        .lazy_quotes(input.lazy_quotes)
        .trim_leading_space(input.trim_leading_space)
        .build()
    else {
        return;
    };

    let mut reader = Reader::with_config(&input.data[..], config);
    if reader.read_header().is_err() {
        return;
    }

    // Decoding errors are expected; we only check that nothing panics.
    for record in reader.records::<Sample>() {
        let _ = record;
    }
});
