#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(value) = serde_json::from_str::<serde_json::Value>(text) else {
        return;
    };

    let result = gridpaint_spec::validate_grid(&value);
    match gridpaint_spec::Grid::from_value(&value) {
        Ok(grid) => {
            assert!(result.is_ok());
            let json = grid.to_json().expect("valid grid serializes");
            let reparsed = gridpaint_spec::Grid::from_json_str(&json).expect("round trip");
            assert_eq!(grid, reparsed);
        }
        Err(_) => assert!(!result.is_ok()),
    }
});
