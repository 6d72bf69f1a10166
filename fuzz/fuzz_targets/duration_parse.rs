#![no_main]

use libfuzzer_sys::fuzz_target;

use daytime::Duration;

fuzz_target!(|data: &str| {
    if let Ok(duration) = data.parse::<Duration>() {
        assert_eq!(duration.to_string(), data);
    }
});
