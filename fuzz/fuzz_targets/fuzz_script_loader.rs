#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use quadrillion::config::ScriptLoader;

fuzz_target!(|data: &[u8]| {
    if let Ok(yaml) = std::str::from_utf8(data) {
        let _ = ScriptLoader::with_defaults().load_str(yaml, Path::new("fuzz.yaml"));
    }
});
