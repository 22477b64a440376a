//! Round-trip checks for the optional serde support.

use crate::{F2Dot14, Fixed, GlyphId16, Tag};

fn round_trip<T>(value: T)
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + core::fmt::Debug,
{
    let json = serde_json::to_string(&value).unwrap();
    let back: T = serde_json::from_str(&json).unwrap();
    assert_eq!(value, back);
}

#[test]
fn scalars_round_trip() {
    round_trip(Fixed::from_f64(-1.5));
    round_trip(F2Dot14::from_f64(0.25));
    round_trip(GlyphId16::new(42));
    round_trip(Tag::new(b"latn"));
}
