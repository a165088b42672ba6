#![no_main]
use libfuzzer_sys::fuzz_target;
use mar_stream::parsing::{ArchiveHeaderParser, IndexEntries, IndexHeaderParser};
use mar_stream::{parse, MarArchive, ParseOptions};

// Every input must either parse or return an error, never panic.
fuzz_target!(|data: &[u8]| {
    let payloads = parse(data);

    // Header parsers on their own
    if let Ok(header) = ArchiveHeaderParser::parse(data) {
        if let Ok(region) = IndexHeaderParser::parse(data, header.index_offset) {
            for entry in IndexEntries::new(data, region) {
                match entry {
                    Ok(entry) => {
                        let payload = entry.payload(data).map(<[u8]>::len);
                        assert_eq!(payload, Some(entry.length as usize));
                    }
                    Err(_) => break,
                }
            }
        }
    }

    // Filtering must not change whether the buffer is accepted
    let opts = ParseOptions {
        filter: Some(Box::new(|name, index| name.len() % 2 == index % 2)),
        max_entries: Some(3),
    };
    assert_eq!(payloads.is_ok(), MarArchive::parse_with(data, &opts).is_ok());
});
