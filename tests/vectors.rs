//! Known-answer vectors for conversion, blinding and swarm space

use hex_literal::hex;
use session_blinding::*;

#[test]
fn montgomery_to_edwards_kat() {
    let u = hex!("d871fc80ca007eed9b2f4df72853e2a2d5465a92fcb1889fb5c84aa2833b3b40");
    assert_eq!(
        montgomery_to_edwards(&u).unwrap(),
        hex!("534eff88b5a39478963ec070a5032db54ce7457a4bb4b4f1c73355eb48ab3473")
    );
}

#[test]
fn edwards_to_montgomery_kat() {
    let y = hex!("534eff88b5a39478963ec070a5032db54ce7457a4bb4b4f1c73355eb48ab3473");
    assert_eq!(
        edwards_to_montgomery(&y).unwrap(),
        hex!("d871fc80ca007eed9b2f4df72853e2a2d5465a92fcb1889fb5c84aa2833b3b40")
    );
}

#[test]
fn typed_conversion_kat_from_prefixed_text() {
    let id: Identifier = "05d871fc80ca007eed9b2f4df72853e2a2d5465a92fcb1889fb5c84aa2833b3b40"
        .parse()
        .unwrap();
    let pk = id.session_id().unwrap().to_ed25519().unwrap();
    assert_eq!(pk.to_string(), "534eff88b5a39478963ec070a5032db54ce7457a4bb4b4f1c73355eb48ab3473");
    assert_eq!(Identifier::session(pk.to_session_id().unwrap()), id);
}

#[test]
fn swarm_space_kat() {
    let id = hex!("fc331b505085fecc2188707c1da8002ee3edc6eb5591e36ded40a4669a94ab11");
    assert_eq!(swarm_space(&id), hex!("d31609a18228b69e"));
    assert_eq!(swarm_space_u64(&id), 0xd316_09a1_8228_b69e);
}

#[test]
fn blind_15_kat() {
    let sid = SessionId(hex!("fe94b7ad4b7f1cc1bb92671f1f0d243f226e115b33770465e82b503fc3e96e1f"));
    let spk = ServerPk(hex!("abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789"));
    let c = blind_15(&sid, &spk).unwrap();
    assert_eq!(c.primary.0, hex!("b74ed205f1f931e1bb1291183778a9456b835937d923b0f2e248aa3a44c07844"));
    assert_eq!(c.flipped.0, hex!("b74ed205f1f931e1bb1291183778a9456b835937d923b0f2e248aa3a44c078c4"));
    assert_eq!(c.canonical(), c.flipped);
}

#[test]
fn blind_25_kat() {
    let sid = SessionId(hex!("fe94b7ad4b7f1cc1bb92671f1f0d243f226e115b33770465e82b503fc3e96e1f"));
    let spk = ServerPk(hex!("abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789"));
    assert_eq!(
        blind_25(&sid, &spk).unwrap().0,
        hex!("3b991dcbba44cfdb45d5b38880d95cff723309e3ece6fd01415ad5fa1dccc7ac")
    );
}

#[test]
fn unblind_15_kat() {
    let blinded = BlindedId(hex!("264c132e2e72a9c50b7a981eac11a48b3e51ae5a0ea45ea47deb519a3fa76612"));
    let spk = ServerPk(hex!("ac9c872e525a58970df6971655abb944a30b38853442a793b29843d20795e840"));
    assert_eq!(
        unblind_15(&blinded, &spk).unwrap().0,
        hex!("7aeb66e45660c3bdfb7c62706f6440226af43ec13f3b6f899c1dd4db1b8fce5b")
    );
}

#[test]
fn community_blinding_and_matching_kat() {
    let sid: Identifier = "055bcd2bb6e600c43741173e489d925a505a11ab2b971afde56e50272e430f8b37".parse().unwrap();
    let sid = sid.session_id().unwrap();
    let spk: ServerPk = "1615317ca1d8ecdf12dad1bbf1d28d3a90c94fc0010043a7fdc1609ad1c5d111".parse().unwrap();

    let c = blind_15(&sid, &spk).unwrap();
    assert_eq!(c.primary.to_string(), "62b2368a1d5452cc25c713b9add4f29405e5e58f6c4aa83fde602a7308bae794");
    assert_eq!(c.flipped.to_string(), "62b2368a1d5452cc25c713b9add4f29405e5e58f6c4aa83fde602a7308bae714");
    assert_eq!(c.canonical(), c.primary);

    let blinded: Identifier = "1562b2368a1d5452cc25c713b9add4f29405e5e58f6c4aa83fde602a7308bae714".parse().unwrap();
    assert!(matches_blinded(&sid, &blinded, &spk).unwrap());
    assert_eq!(unblind_15(&blinded.blinded_id().unwrap(), &spk).unwrap(), sid);
}

#[test]
fn rejects_short_payloads_before_any_arithmetic() {
    assert_eq!(
        "abcd".parse::<ServerPk>(),
        Err(BlindingError::InvalidLength { expected: 64, got: 4 })
    );
    assert_eq!(
        SessionId::try_from(&[0u8; 31][..]),
        Err(BlindingError::InvalidLength { expected: 32, got: 31 })
    );
}
