use std::io::Write;
use std::process::Command;
use std::process::Output;
use std::process::Stdio;

use doobie::hash::Algorithm;
use doobie::hash::Hasher;
use doobie::DigestSink;
use doobie::StreamHasher;
use rand::rngs::OsRng;
use rand::RngCore;
use tempfile::NamedTempFile;

#[test]
fn digest_to_file() {
    let data = random_bytes(100_000);
    let digest_file = NamedTempFile::new().unwrap();
    let output = doobie(
        &["-a", "sha256", "-o", digest_file.path().to_str().unwrap()],
        &data,
    );
    assert!(output.status.success(), "{output:?}");
    assert_eq!(data, output.stdout);
    assert!(output.stderr.is_empty(), "{output:?}");
    let mut hasher = Algorithm::Sha256.hasher();
    hasher.update(&data);
    let expected = hasher.finalize().to_string();
    assert_eq!(expected, std::fs::read_to_string(digest_file.path()).unwrap());
}

#[test]
fn digest_to_stderr() {
    let output = doobie(&[], b"");
    assert!(output.status.success(), "{output:?}");
    assert!(output.stdout.is_empty());
    assert_eq!(b"d41d8cd98f00b204e9800998ecf8427e", &output.stderr[..]);
}

#[test]
fn progress_is_not_written_to_pipe() {
    let data = random_bytes(3 * 1024 * 1024);
    let output = doobie(&["-a", "sha1", "-vv"], &data);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(data, output.stdout);
    assert_eq!(40, output.stderr.len());
}

#[test]
fn huge_chunk_size() {
    let chunk_size = usize::MAX.to_string();
    let output = doobie(&["-b", &chunk_size], b"hello");
    assert!(output.status.success(), "{output:?}");
    assert_eq!(b"hello", &output.stdout[..]);
    assert_eq!(b"5d41402abc4b2a76b9719d911017c592", &output.stderr[..]);
}

#[test]
fn unknown_algorithm() {
    let output = doobie(&["-a", "sha3"], b"hello");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn check() {
    let digest = "5d41402abc4b2a76b9719d911017c592";
    let output = doobie(&["-c", digest], b"hello");
    assert!(output.status.success(), "{output:?}");
    assert_eq!(b"hello", &output.stdout[..]);
    let output = doobie(&["-c", &digest.to_uppercase()], b"hello");
    assert!(output.status.success(), "{output:?}");
    let output = doobie(&["-c", digest], b"hello!");
    assert!(!output.status.success(), "{output:?}");
    assert_eq!(b"hello!", &output.stdout[..]);
    // SHA-256 digest of "hello" does not match the default algorithm.
    let output = doobie(
        &[
            "-c",
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
        ],
        b"hello",
    );
    assert!(!output.status.success(), "{output:?}");
    assert!(output.stdout.is_empty());
}

#[test]
fn library_digest_to_file() {
    let data = random_bytes(5000);
    let digest_file = NamedTempFile::new().unwrap();
    let mut output = Vec::new();
    let hash = StreamHasher::from_name("sha384", 0)
        .unwrap()
        .run(
            &data[..],
            &mut output,
            std::io::stderr(),
            DigestSink::Writer(digest_file.reopen().unwrap()),
        )
        .unwrap();
    assert_eq!(data, output);
    assert_eq!(
        hash.to_string(),
        std::fs::read_to_string(digest_file.path()).unwrap()
    );
}

fn doobie(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_doobie"))
        .args(args)
        .env_remove("DOOBIE_ALGORITHM")
        .env_remove("DOOBIE_OUTPUT")
        .env_remove("DOOBIE_CHUNK_SIZE")
        .env_remove("DOOBIE_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    let mut stdin = child.stdin.take().unwrap();
    let input = input.to_vec();
    let writer = std::thread::spawn(move || {
        // The child exits early on invalid arguments.
        let _ = stdin.write_all(&input);
    });
    let output = child.wait_with_output().unwrap();
    writer.join().unwrap();
    output
}

fn random_bytes(len: usize) -> Vec<u8> {
    let mut data = vec![0_u8; len];
    OsRng.fill_bytes(&mut data);
    data
}
