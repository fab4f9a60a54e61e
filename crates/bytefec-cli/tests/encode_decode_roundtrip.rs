use std::fs;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bytefec-cli"))
}

fn run_ok(cmd: &mut Command) {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn roundtrip_encode_decode_matches_bytes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("plain.bin");
    let encoded = dir.path().join("plain.fec");
    let decoded = dir.path().join("plain.out");

    // Every byte value, a few times over.
    let payload: Vec<u8> = (0u16..=255).map(|b| b as u8).cycle().take(1024).collect();
    fs::write(&input, &payload).expect("write input");

    run_ok(bin().args([
        "encode",
        "--in",
        input.to_str().unwrap(),
        "--out",
        encoded.to_str().unwrap(),
    ]));

    // Wire layout: data byte first, output exactly 2x.
    let enc = fs::read(&encoded).expect("read encoded");
    assert_eq!(enc.len(), payload.len() * 2);
    for (k, &b) in payload.iter().enumerate() {
        assert_eq!(enc[2 * k], b, "data byte not first at codeword {k}");
    }

    run_ok(bin().args([
        "decode",
        "--in",
        encoded.to_str().unwrap(),
        "--out",
        decoded.to_str().unwrap(),
    ]));

    let out = fs::read(&decoded).expect("read decoded");
    assert_eq!(out, payload, "decoded bytes differ from original");
}

#[test]
fn decode_drops_odd_trailing_byte() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("short.bin");
    let encoded = dir.path().join("short.fec");
    let decoded = dir.path().join("short.out");

    fs::write(&input, [1u8, 2, 3]).expect("write input");

    run_ok(bin().args([
        "encode",
        "--in",
        input.to_str().unwrap(),
        "--out",
        encoded.to_str().unwrap(),
    ]));

    // A stray odd byte at the end must not disturb the decoded prefix.
    let mut enc = fs::read(&encoded).expect("read encoded");
    enc.push(0x7F);
    fs::write(&encoded, &enc).expect("rewrite encoded");

    run_ok(bin().args([
        "decode",
        "--in",
        encoded.to_str().unwrap(),
        "--out",
        decoded.to_str().unwrap(),
    ]));

    let out = fs::read(&decoded).expect("read decoded");
    assert_eq!(out, vec![1, 2, 3]);
}

#[test]
fn empty_input_encodes_to_empty_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("empty.bin");
    let encoded = dir.path().join("empty.fec");

    fs::write(&input, b"").expect("write input");

    run_ok(bin().args([
        "encode",
        "--in",
        input.to_str().unwrap(),
        "--out",
        encoded.to_str().unwrap(),
    ]));

    assert_eq!(fs::read(&encoded).expect("read encoded").len(), 0);
}
