use hylinear::codec::{PackedStr, PackedWord, decode, encode, string_concat};
use hylinear::list::List;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn units(bytes: &[u8]) -> List<u8> {
    bytes.iter().copied().collect()
}

fn words(raw: &[u32]) -> List<PackedWord> {
    raw.iter().copied().map(PackedWord::from_raw).collect()
}

fn raw(words: &List<PackedWord>) -> Vec<u32> {
    words.iter().map(|w| w.raw()).collect()
}

fn random_zero_free(rng: &mut impl Rng, max_len: usize) -> Vec<u8> {
    let len = rng.random_range(0..=max_len);
    (0..len).map(|_| rng.random_range(1..=255u8)).collect()
}

#[test]
fn encode_ksjkajf_packs_two_words() {
    let encoded = encode(units(b"ksjkajf"));
    assert_eq!(encoded.len(), 2);

    let mut iter = encoded.iter();
    let first = *iter.next().unwrap();
    let second = *iter.next().unwrap();
    assert_eq!(first.units(), *b"ksjk");
    assert_eq!(second.units(), [b'a', b'j', b'f', 0]);
    assert_eq!(first.unit(0), b'k');
    assert_eq!(first.unit(3), b'k');
    assert_eq!(second.unit(3), 0);

    let decoded: Vec<u8> = decode(encoded).into_iter().collect();
    assert_eq!(decoded, b"ksjkajf");
}

#[test]
fn single_unit_lands_in_low_byte() {
    assert_eq!(raw(&encode(units(&[0x41]))), [0x0000_0041]);
}

#[test]
fn decode_stops_at_zero_inside_word() {
    let decoded: Vec<u8> = decode(words(&[0x0000_6f48])).into_iter().collect();
    assert_eq!(decoded, b"Ho");
}

#[test]
fn decode_ignores_words_after_sentinel() {
    // Second byte of the first word is zero: one unit, then the whole decode halts.
    let decoded: Vec<u8> = decode(words(&[0x4242_0041, 0x4343_4343]))
        .into_iter()
        .collect();
    assert_eq!(decoded, b"A");
}

#[test]
fn word_count_is_ceiling_of_quarter_length() {
    for n in 0..=13usize {
        let input: Vec<u8> = (0..n).map(|i| b'a' + (i % 26) as u8).collect();
        assert_eq!(encode(units(&input)).len(), n.div_ceil(4), "length {n}");
    }
}

#[test]
fn exact_multiple_of_four_has_no_padding_word() {
    let encoded = encode(units(b"abcdefgh"));
    assert_eq!(raw(&encoded), [0x6463_6261, 0x6867_6665]);
    let decoded: Vec<u8> = decode(encoded).into_iter().collect();
    assert_eq!(decoded, b"abcdefgh");
}

#[test]
fn empty_input_roundtrips() {
    assert!(encode(List::new()).is_empty());
    assert!(decode(List::new()).is_empty());
}

#[test]
fn embedded_zero_truncates_silently() {
    let decoded: Vec<u8> = decode(encode(units(b"ab\0cd"))).into_iter().collect();
    assert_eq!(decoded, b"ab");
}

#[test]
fn random_zero_free_sequences_roundtrip() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x42);
    for _ in 0..500 {
        let input = random_zero_free(&mut rng, 64);
        let decoded: Vec<u8> = decode(encode(units(&input))).into_iter().collect();
        assert_eq!(decoded, input);
    }
}

#[test]
fn concatenation_law() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..200 {
        let a = random_zero_free(&mut rng, 23);
        let b = random_zero_free(&mut rng, 23);
        let joined: Vec<u8> = decode(string_concat(encode(units(&a)), encode(units(&b))))
            .into_iter()
            .collect();
        let expected: Vec<u8> = a.iter().chain(&b).copied().collect();
        assert_eq!(joined, expected);
    }
}

#[test]
fn packed_str_concat_and_display() {
    let s = PackedStr::from("Hello, ").concat(PackedStr::from("world"));
    assert_eq!(s.to_string(), "Hello, world");
    assert_eq!(s.len_units(), 12);
    assert_eq!(s.len_words(), 3);
    assert!(PackedStr::new().is_empty());
}
