#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(spec) = std::str::from_utf8(data) {
        // Parsing must never panic; accepted fields must render and re-parse
        if let Ok(field) = spec.parse::<nagret::PerfField>() {
            let _ = field.render().parse::<nagret::PerfField>();
        }
    }
});
