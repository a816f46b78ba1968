#![no_main]

use libfuzzer_sys::fuzz_target;
use quadrillion::config::Action;
use quadrillion::phase::PuzzleEngine;

// Each byte pair is one action: the high bit of the first byte picks the
// kind, the remaining bits are indices.
fuzz_target!(|data: &[u8]| {
    let mut engine = PuzzleEngine::new();
    for pair in data.chunks_exact(2) {
        let index = usize::from(pair[0] & 0x0f);
        let action = if pair[0] & 0x80 == 0 {
            Action::erase(index)
        } else {
            Action::reorder(index, usize::from(pair[1] & 0x0f))
        };
        let before = engine.phase();
        if engine.apply(&action).is_err() {
            assert_eq!(engine.phase(), before);
        }
        assert!(engine.phase() >= before);
    }
});
