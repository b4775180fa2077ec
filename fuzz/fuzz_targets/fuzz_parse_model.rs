#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        // Loading and compiling arbitrary text must never panic
        if let Ok(model) = dmodel::parse_model(source, Path::new("fuzz.dmodel")) {
            let _ = dmodel::compile(&model);
        }
    }
});
