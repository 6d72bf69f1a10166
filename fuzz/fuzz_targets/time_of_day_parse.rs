#![no_main]

use libfuzzer_sys::fuzz_target;

use daytime::{Duration, TimeOfDay};

fuzz_target!(|data: &str| {
    if let Ok(time) = data.parse::<TimeOfDay>() {
        assert_eq!(time.to_string(), data);

        let duration = Duration::from(time);
        assert_eq!(time + Duration::from(86_400u64), time);
        assert_eq!((time + duration) - duration, time);
    }
});
