#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let message = String::from_utf8_lossy(data);
    let Ok(bitmap) = gridpaint_spec::message_bitmap(&message, 1) else {
        return;
    };
    assert!(bitmap.width() <= gridpaint_spec::COLS);
});
