//! Fuzz target for conversion request lines.
//!
//! This fuzzer feeds arbitrary UTF-8 lines to the request parser and runs
//! the resulting conversion, checking for panics, crashes, or hangs.

#![no_main]

use bboxconv::bbox::parse::fuzz_parse_request;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    let _ = fuzz_parse_request(line);
});
