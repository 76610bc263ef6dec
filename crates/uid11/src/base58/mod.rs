//! Fixed-width Base58 codec for 64-bit payloads.
//!
//! Every `u64` maps to exactly [`ENCODED_LEN`] symbols of the Bitcoin
//! [`ALPHABET`], left padded with the zero symbol `1`. The alphabet is in
//! ascending ASCII order, so encoded strings compare exactly like the
//! integers they encode and can be used directly as sortable keys.
//!
//! ```
//! use uid11::base58;
//!
//! assert_eq!(base58::encode(0), base58::MIN_ENCODED);
//! assert_eq!(base58::encode(u64::MAX), base58::MAX_ENCODED);
//! assert_eq!(base58::decode("11111111121"), Ok(58));
//!
//! // A prefix decodes to the smallest payload whose encoding starts with it.
//! let lower = base58::decode_partial("jpX").unwrap();
//! assert!(base58::encode(lower).as_str().starts_with("jpX"));
//! ```

mod codec;
mod error;
mod formatter;

pub use codec::{ALPHABET, BASE, ENCODED_LEN, MAX_ENCODED, MIN_ENCODED};
use codec::{all_in_alphabet, encode_base58, narrow, scale, unpack};
pub use error::*;
pub use formatter::*;

/// Encodes `payload` as exactly 11 Base58 symbols.
///
/// Never fails: every `u64` has a representation.
#[must_use]
pub fn encode(payload: u64) -> Base58Formatter {
    Base58Formatter::new(payload)
}

/// Encodes `payload` into `buf` without allocating and returns a view of it.
///
/// ```
/// let mut buf = [0_u8; uid11::base58::ENCODED_LEN];
/// let s = uid11::base58::encode_to_buf(42, &mut buf);
/// assert_eq!(s, "1111111111j");
/// ```
pub fn encode_to_buf(payload: u64, buf: &mut [u8; ENCODED_LEN]) -> &str {
    encode_base58(payload, buf);
    // SAFETY: `encode_base58` fills every byte with an ASCII alphabet symbol.
    unsafe { core::str::from_utf8_unchecked(buf) }
}

/// Decodes a full 11 symbol string back into its payload.
///
/// # Errors
///
/// - [`Base58Error::DecodeInvalidLen`] unless the input is exactly 11 bytes
/// - [`Base58Error::DecodeInvalidAscii`] for a byte outside the alphabet
/// - [`Base58Error::DecodeOverflow`] for strings that sort above
///   [`MAX_ENCODED`]
pub fn decode(s: impl AsRef<str>) -> Result<u64, Base58Error> {
    let bytes = s.as_ref().as_bytes();
    if bytes.len() != ENCODED_LEN {
        return Err(Base58Error::DecodeInvalidLen { len: bytes.len() });
    }
    narrow(unpack(bytes)?)
}

/// Decodes a prefix of up to 11 symbols into the smallest payload whose full
/// encoding starts with that prefix.
///
/// The prefix value is scaled by `58^(11 - len)`, as if the missing trailing
/// symbols were the zero symbol `1`. This makes prefixes usable as lower
/// bounds for range scans over stored encodings. The empty prefix decodes to
/// `0`.
///
/// # Errors
///
/// - [`Base58Error::DecodeInvalidLen`] for inputs longer than 11 bytes
/// - [`Base58Error::DecodeInvalidAscii`] for a byte outside the alphabet
/// - [`Base58Error::DecodeOverflow`] when no `u64` has this prefix (for
///   example `"k"`, since `encode(u64::MAX)` starts with `j`)
pub fn decode_partial(s: impl AsRef<str>) -> Result<u64, Base58Error> {
    let bytes = s.as_ref().as_bytes();
    if bytes.len() > ENCODED_LEN {
        return Err(Base58Error::DecodeInvalidLen { len: bytes.len() });
    }
    let acc = unpack(bytes)?;
    narrow(acc * scale(ENCODED_LEN - bytes.len()))
}

/// Returns `true` if `s` is exactly 11 bytes long and every byte is in the
/// alphabet.
///
/// This is a syntactic check only; strings above [`MAX_ENCODED`] pass it but
/// fail [`decode`].
#[must_use]
pub fn is_valid(s: impl AsRef<str>) -> bool {
    let bytes = s.as_ref().as_bytes();
    bytes.len() == ENCODED_LEN && all_in_alphabet(bytes)
}

/// Returns `true` if `s` is at most 11 bytes long and every byte is in the
/// alphabet.
#[must_use]
pub fn is_valid_partial(s: impl AsRef<str>) -> bool {
    let bytes = s.as_ref().as_bytes();
    bytes.len() <= ENCODED_LEN && all_in_alphabet(bytes)
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use ::rand::{Rng, rng};

    const BOUNDARIES: [u64; 6] = [0, 1, 57, 58, 1 << 63, u64::MAX];

    fn samples() -> impl Iterator<Item = u64> {
        let mut r = rng();
        BOUNDARIES
            .into_iter()
            .chain((0..10_000).map(move |_| r.random::<u64>()))
    }

    #[test]
    fn roundtrip_preserves_payload() {
        for v in samples() {
            let encoded = encode(v);
            assert_eq!(decode(encoded), Ok(v), "roundtrip for {v}: {encoded}");
        }
    }

    #[test]
    fn encoding_is_fixed_width_and_closed_over_alphabet() {
        for v in samples() {
            let encoded = encode(v);
            assert_eq!(encoded.as_str().len(), ENCODED_LEN);
            assert!(encoded.as_str().bytes().all(|b| ALPHABET.contains(&b)));
            assert!(is_valid(encoded));
        }
    }

    #[test]
    fn string_order_matches_numeric_order() {
        let mut values: std::vec::Vec<u64> = samples().collect();
        let mut encoded: std::vec::Vec<_> = values.iter().map(|&v| encode(v)).collect();
        values.sort_unstable();
        encoded.sort_unstable_by(|a, b| a.as_str().cmp(b.as_str()));
        for (v, e) in values.iter().zip(&encoded) {
            assert_eq!(decode(e), Ok(*v));
        }
    }

    #[test]
    fn literal_fixtures() {
        assert_eq!(encode(0), "11111111111");
        assert_eq!(encode(u64::MAX), "jpXCZedGfVQ");
        assert_eq!(decode("11111111111"), Ok(0));
        assert_eq!(decode("jpXCZedGfVQ"), Ok(u64::MAX));
    }

    #[test]
    fn encode_to_buf_matches_encode() {
        let mut buf = [0_u8; ENCODED_LEN];
        for v in BOUNDARIES {
            assert_eq!(encode_to_buf(v, &mut buf), encode(v).as_str());
        }
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert_eq!(decode(""), Err(Base58Error::DecodeInvalidLen { len: 0 }));
        assert_eq!(
            decode("1111111111"),
            Err(Base58Error::DecodeInvalidLen { len: 10 })
        );
        assert_eq!(
            decode("111111111111"),
            Err(Base58Error::DecodeInvalidLen { len: 12 })
        );
    }

    #[test]
    fn decode_rejects_excluded_characters() {
        assert!(matches!(
            decode("0000000000I"),
            Err(Base58Error::DecodeInvalidAscii { .. })
        ));
        for excluded in ["0", "O", "I", "l", "-", "_", " "] {
            let s = std::format!("1111111111{excluded}");
            assert_eq!(
                decode(&s),
                Err(Base58Error::DecodeInvalidAscii {
                    byte: excluded.as_bytes()[0],
                    index: 10
                })
            );
            assert!(!is_valid(&s));
        }
    }

    #[test]
    fn decode_rejects_non_ascii() {
        // 'é' is two bytes, so the 10 symbols plus it are 12 bytes.
        assert_eq!(
            decode("1111111111é"),
            Err(Base58Error::DecodeInvalidLen { len: 12 })
        );
        assert!(matches!(
            decode("111111111é"),
            Err(Base58Error::DecodeInvalidAscii { index: 9, .. })
        ));
    }

    #[test]
    fn decode_rejects_values_above_u64() {
        assert!(is_valid("jpXCZedGfVR"));
        assert_eq!(decode("jpXCZedGfVR"), Err(Base58Error::DecodeOverflow));
        assert_eq!(decode("zzzzzzzzzzz"), Err(Base58Error::DecodeOverflow));
    }

    #[test]
    fn decode_partial_scales_prefix() {
        assert_eq!(decode_partial(""), Ok(0));
        assert_eq!(decode_partial("1"), Ok(0));
        assert_eq!(decode_partial("2"), Ok(430_804_206_899_405_824));
        assert_eq!(decode_partial("j"), Ok(18_093_776_689_775_044_608));
        assert_eq!(decode_partial("jpX"), Ok(18_446_718_542_989_896_704));
        assert_eq!(decode_partial("jpXCZedGfVQ"), Ok(u64::MAX));
    }

    #[test]
    fn decode_partial_is_smallest_payload_with_prefix() {
        for v in samples() {
            let encoded = encode(v);
            for len in 0..=ENCODED_LEN {
                let prefix = &encoded.as_str()[..len];
                let lower = decode_partial(prefix).unwrap();
                assert!(lower <= v);
                let lower_encoded = encode(lower);
                assert!(lower_encoded.as_str().starts_with(prefix));
                assert!(lower_encoded.as_str()[len..].bytes().all(|b| b == b'1'));
            }
        }
    }

    #[test]
    fn decode_partial_is_monotonic_in_prefix_length() {
        for v in samples() {
            let encoded = encode(v);
            let mut prev = 0;
            for len in 0..=ENCODED_LEN {
                let next = decode_partial(&encoded.as_str()[..len]).unwrap();
                assert!(prev <= next, "prefix bound decreased for {encoded} at {len}");
                prev = next;
            }
            assert_eq!(prev, v);
        }
    }

    #[test]
    fn decode_partial_rejects_invalid_input() {
        assert_eq!(
            decode_partial("111111111111"),
            Err(Base58Error::DecodeInvalidLen { len: 12 })
        );
        assert_eq!(
            decode_partial("1O"),
            Err(Base58Error::DecodeInvalidAscii {
                byte: b'O',
                index: 1
            })
        );
        assert_eq!(decode_partial("k"), Err(Base58Error::DecodeOverflow));
        assert_eq!(decode_partial("z"), Err(Base58Error::DecodeOverflow));
    }

    #[test]
    fn validity_checks() {
        assert!(is_valid(MIN_ENCODED));
        assert!(is_valid(MAX_ENCODED));
        assert!(!is_valid(""));
        assert!(!is_valid("jpX"));
        assert!(!is_valid("111111111111"));

        assert!(is_valid_partial(""));
        assert!(is_valid_partial("jpX"));
        assert!(is_valid_partial(MAX_ENCODED));
        assert!(!is_valid_partial("111111111111"));
        assert!(!is_valid_partial("l"));
    }
}
