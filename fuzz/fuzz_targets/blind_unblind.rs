#![no_main]

use libfuzzer_sys::fuzz_target;
use session_blinding::{blind_15, unblind_15, ServerPk, SessionId};

fuzz_target!(|data: &[u8]| {
    // Need a session id and a server key
    if data.len() < 64 { return; }

    let Ok(session_id) = SessionId::try_from(&data[..32]) else { return };
    let Ok(server_pk) = ServerPk::try_from(&data[32..64]) else { return };

    // Off-curve, small-order and mixed-order session ids are rejected
    let Ok(candidates) = blind_15(&session_id, &server_pk) else { return };
    assert_eq!(blind_15(&session_id, &server_pk).ok(), Some(candidates));

    // The candidates are ±kA, so both unblind to the session id
    let a = unblind_15(&candidates.primary, &server_pk).expect("primary decompresses");
    let b = unblind_15(&candidates.flipped, &server_pk).expect("flipped decompresses");
    assert_eq!(a, session_id);
    assert_eq!(b, session_id);
});
