#![no_main]

use libfuzzer_sys::fuzz_target;

use tzrule::tz::TimeZoneInfo;

fn do_fuzz(data: &[u8]) {
    // Parsing must never panic, whatever the input.
    let _ = TimeZoneInfo::parse_posix_prefix(data);
    let Ok(first) = TimeZoneInfo::parse_posix(data) else { return };

    let printed = first.to_posix_string();
    match TimeZoneInfo::parse_posix(&printed) {
        Ok(second) => {
            assert!(
                first.is_equivalent(&second),
                "expected the initially parsed value to be equivalent \
                 to the value after printing and re-parsing: \
                 `{printed}` gave {second:?}, but started as {first:?}",
            );
        }
        Err(e) => {
            panic!(
                "should be able to parse a printed value; \
                 failed with `{e}` at: `{printed}`, \
                 corresponding to {first:?}",
            );
        }
    }
}

fuzz_target!(|data: &[u8]| do_fuzz(data));
