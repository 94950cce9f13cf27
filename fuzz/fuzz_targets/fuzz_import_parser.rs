#![no_main]

use lambda_bundler::domain::services::{ContinuationBuffer, ImportClassifier, ImportParser};
use lambda_bundler::domain::value_objects::DEFAULT_SHARED_MODULE;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let parser = ImportParser::new(ImportClassifier::new(DEFAULT_SHARED_MODULE));
        let mut buffer = ContinuationBuffer::new();
        for (index, line) in content.lines().enumerate() {
            let _ = parser.parse_line(line, index + 1, &mut buffer);
        }
        let _ = parser.finish(&mut buffer);
    }
});
