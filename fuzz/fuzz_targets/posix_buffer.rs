#![no_main]

use libfuzzer_sys::fuzz_target;

use tzrule::tz::TimeZoneInfo;

fuzz_target!(|input: (&str, u8)| {
    let (posix, size) = input;
    let Ok(tz) = TimeZoneInfo::parse_posix(posix) else { return };
    let full = tz.to_posix_string();

    let size = usize::from(size);
    let mut data = vec![0xA5u8; size + 1];
    let len = tz.to_posix_buffer(&mut data[..size]);
    assert_eq!(data[size], 0xA5, "wrote past the end for `{full}`");
    if size == 0 {
        assert_eq!(len, 0);
        return;
    }
    assert!(len < size);
    assert_eq!(data[len], 0);
    assert!(full.as_bytes().starts_with(&data[..len]));
});
