use std::fmt::Debug;
use std::fmt::Display;
use std::str::FromStr;

use arbitrary::Arbitrary;
use arbtest::arbtest;
use rand::rngs::OsRng;
use rand::RngCore;

use super::*;

pub fn same_as_computing_hash_of_the_whole_stream<H: Hasher>()
where
    H::Output: PartialEq + Debug,
{
    arbtest(|u| {
        let len = u.int_in_range::<usize>(0..=MAX_LEN)?;
        let mut data = vec![0_u8; len];
        OsRng.fill_bytes(&mut data);
        let mut hasher = H::new();
        let mut rest = &data[..];
        while !rest.is_empty() {
            let n = u.int_in_range::<usize>(1..=rest.len())?;
            let (chunk, tail) = rest.split_at(n);
            hasher.update(chunk);
            rest = tail;
        }
        let actual_hash = hasher.finalize();
        let expected_hash = H::compute(&data);
        assert_eq!(expected_hash, actual_hash);
        Ok(())
    });
}

pub fn display_parse<T: Display + FromStr + Debug + PartialEq + for<'a> Arbitrary<'a>>() {
    arbtest(|u| {
        let expected: T = u.arbitrary()?;
        let string = expected.to_string();
        let actual: T = string
            .parse()
            .map_err(|_| panic!("string {:?}", string))
            .unwrap();
        assert_eq!(
            expected, actual,
            "expected = {:?}, actual = {:?}, string = {:?}",
            expected, actual, string
        );
        Ok(())
    });
}

pub fn is_lower_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

const MAX_LEN: usize = 4096 * 3;
