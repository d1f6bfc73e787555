#![no_main]

use libfuzzer_sys::fuzz_target;
use session_blinding::Identifier;

fuzz_target!(|data: &[u8]| {
    // Raw form: anything that parses must re-encode to the same bytes
    if let Ok(id) = Identifier::try_from(data) {
        assert_eq!(&id.to_bytes()[..], data);
    }

    // Text form: anything that parses must format back to its lowercase input
    if let Ok(text) = core::str::from_utf8(data) {
        if let Ok(id) = text.parse::<Identifier>() {
            let formatted = id.to_string();
            assert!(formatted.ends_with(&text.to_ascii_lowercase()));
        }
    }
});
