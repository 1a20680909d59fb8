use keyed::Keyed;

/// Verifies that `#[keyed(crate = "keyed")]` is accepted and the generated
/// code compiles correctly. Uses the real crate name as a self-referential
/// alias so no workspace reconfiguration is needed.
#[derive(Keyed)]
#[keyed(crate = "keyed")]
struct CratePathHost {
    #[keyed]
    value: String,
    count: u32,
}

fn main() {
    let host = CratePathHost {
        value: "hello".to_owned(),
        count: 1,
    };
    assert!(CratePathHost::resolve("value").is_some());
    assert!(CratePathHost::resolve("count").is_none());
    let _ = host;
}
