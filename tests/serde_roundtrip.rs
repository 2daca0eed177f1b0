//! `serde`-gated serialization round-trips via `bincode`.
#![cfg(feature = "serde")]

use combinational::{
    rand::Lcg64,
    Error,
};

#[test]
fn rng_state_round_trips_through_bincode() {
    let mut rng = Lcg64::new(1234);
    rng.next_u64();
    let bytes = bincode::serialize(&rng).unwrap();
    let restored: Lcg64 = bincode::deserialize(&bytes).unwrap();
    assert_eq!(rng, restored);
}

#[test]
fn error_round_trips_through_bincode() {
    let err = Error::WidthMismatch { left: 3, right: 5 };
    let bytes = bincode::serialize(&err).unwrap();
    let restored: Error = bincode::deserialize(&bytes).unwrap();
    assert_eq!(err, restored);
}
