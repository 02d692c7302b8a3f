//! Integration tests for the public StrBuf surface.

use serial_test::serial;
use strbuf::{StrBuf, oom};

#[test]
fn insert_then_erase_scenario() {
    let mut buf = StrBuf::new();

    buf.insert(0, b"test");
    assert_eq!(buf.as_slice(), b"test");
    buf.insert(0, b"aa");
    assert_eq!(buf.as_slice(), b"aatest");
    buf.insert(6, b"bb");
    assert_eq!(buf.as_slice(), b"aatestbb");
    buf.insert(2, b"c");
    assert_eq!(buf.as_slice(), b"aactestbb");
    buf.insert(3, &b"test"[..2]);
    assert_eq!(buf.as_slice(), b"aactetestbb");
    buf.insert_fmt(3, format_args!("{}", 10));
    assert_eq!(buf.as_slice(), b"aac10tetestbb");

    buf.erase(2, 9);
    assert_eq!(buf.as_slice(), b"aabb");
    assert_eq!(buf.as_bytes_with_nul(), b"aabb\0");
}

#[test]
fn append_prepend_scenario() {
    let mut buf = StrBuf::new();

    buf.append(b"aa");
    assert_eq!(buf.as_slice(), b"aa");
    buf.append(&b"bbbb"[..3]);
    assert_eq!(buf.as_slice(), b"aabbb");
    buf.append_fmt(format_args!(" {} ", 999));
    assert_eq!(buf.as_slice(), b"aabbb 999 ");

    buf.prepend(b"cc");
    assert_eq!(buf.as_slice(), b"ccaabbb 999 ");
    buf.prepend(&b"ddd"[..1]);
    assert_eq!(buf.as_slice(), b"dccaabbb 999 ");
    buf.prepend_fmt(format_args!("e{}e", 8));
    assert_eq!(buf.as_slice(), b"e8edccaabbb 999 ");
}

#[test]
fn copy_and_release_round_trip() {
    let input = b"abcdefghijklmnopqrstuvwxyz";
    let buf = StrBuf::from_slice(input);
    assert_eq!(buf.as_slice(), input);
    assert_eq!(buf.len(), input.len());
    assert_eq!(buf.into_bytes(), input);
}

#[test]
fn formatted_construction() {
    let buf = StrBuf::from_fmt(format_args!(
        "{} {} test",
        12, "abcdefghijklmnopqrstuvwxyz"
    ));
    assert_eq!(buf.len(), 34);
    assert_eq!(buf.as_slice(), b"12 abcdefghijklmnopqrstuvwxyz test");
    assert_eq!(
        buf.into_bytes(),
        b"12 abcdefghijklmnopqrstuvwxyz test"
    );
}

#[test]
fn insert_matches_concatenation_at_every_offset() {
    let base = b"0123456789";
    let payload = b"xyz";
    for pos in 0..=base.len() {
        let mut buf = StrBuf::from_slice(base);
        buf.insert(pos, payload);

        let mut expected = base[..pos].to_vec();
        expected.extend_from_slice(payload);
        expected.extend_from_slice(&base[pos..]);

        assert_eq!(buf.as_slice(), expected.as_slice(), "pos {pos}");
        assert_eq!(buf.len(), base.len() + payload.len());
        assert_eq!(buf.as_bytes_with_nul().last(), Some(&0));
    }
}

#[test]
fn erase_matches_splice_at_every_range() {
    let base = b"0123456789";
    for pos in 0..=base.len() {
        for count in 0..=(base.len() - pos) {
            let mut buf = StrBuf::from_slice(base);
            buf.erase(pos, count);

            let mut expected = base[..pos].to_vec();
            expected.extend_from_slice(&base[pos + count..]);

            assert_eq!(buf.as_slice(), expected.as_slice(), "pos {pos} count {count}");
            assert_eq!(buf.len(), base.len() - count);
        }
    }
}

#[test]
fn random_op_sequence_matches_vec_model() {
    // Deterministic LCG so failures reproduce
    let mut state: u64 = 0x2545F4914F6CDD1D;
    let mut next = move |bound: usize| -> usize {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 33) as usize) % bound.max(1)
    };

    let mut buf = StrBuf::new();
    let mut model: Vec<u8> = Vec::new();

    for round in 0..2000 {
        match next(5) {
            0 => {
                let chunk = [b'a' + (next(26) as u8); 3];
                buf.append(&chunk);
                model.extend_from_slice(&chunk);
            }
            1 => {
                let chunk = [b'A' + (next(26) as u8); 2];
                buf.prepend(&chunk);
                let mut rebuilt = chunk.to_vec();
                rebuilt.extend_from_slice(&model);
                model = rebuilt;
            }
            2 => {
                let pos = next(model.len() + 1);
                let chunk = [b'0' + (next(10) as u8)];
                buf.insert(pos, &chunk);
                let mut rebuilt = model[..pos].to_vec();
                rebuilt.extend_from_slice(&chunk);
                rebuilt.extend_from_slice(&model[pos..]);
                model = rebuilt;
            }
            3 if !model.is_empty() => {
                let pos = next(model.len());
                let count = next(model.len() - pos + 1);
                buf.erase(pos, count);
                model.drain(pos..pos + count);
            }
            _ => {
                buf.append_fmt(format_args!("{round}"));
                model.extend_from_slice(round.to_string().as_bytes());
            }
        }

        assert_eq!(buf.as_slice(), model.as_slice(), "round {round}");
        assert_eq!(buf.len(), model.len());
        assert!(buf.capacity() >= buf.len());
        assert_eq!(buf.as_bytes_with_nul().last(), Some(&0));
    }
}

#[test]
fn clear_keeps_growth_behavior() {
    let mut buf = StrBuf::new();
    buf.append(&[b'x'; 500]);
    let cap = buf.capacity();
    buf.clear();
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.capacity(), cap);

    // Refilling up to the old size must not grow again
    buf.append(&[b'y'; 500]);
    assert_eq!(buf.capacity(), cap);
}

#[test]
fn adopt_and_extract_ownership() {
    let owned = std::ffi::CString::new("handed over").unwrap();
    let buf = StrBuf::from(owned);
    assert_eq!(buf.as_slice(), b"handed over");

    let returned = buf.into_c_string().unwrap();
    assert_eq!(returned.as_bytes(), b"handed over");
}

#[test]
#[serial]
fn oom_hook_can_be_replaced_and_reset() {
    fn unwinding_hook(requested: usize) -> ! {
        panic!("allocation of {requested} bytes failed");
    }

    oom::set_oom_hook(unwinding_hook);
    oom::reset_oom_hook();

    // Normal operation is unaffected by hook churn
    let mut buf = StrBuf::new();
    buf.append(b"still works");
    assert_eq!(buf.as_slice(), b"still works");
}
