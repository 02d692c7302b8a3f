#![no_main]

use libfuzzer_sys::fuzz_target;
use strbuf::StrBuf;

// Drives a StrBuf and a Vec<u8> model through the same op sequence decoded
// from the fuzz input, then checks content and terminator agreement.
fuzz_target!(|data: &[u8]| {
    let mut buf = StrBuf::new();
    let mut model: Vec<u8> = Vec::new();

    let mut input = data;
    while input.len() >= 2 {
        let (op, rest) = input.split_first().unwrap();
        let take = (rest[0] as usize % 8).min(rest.len().saturating_sub(1));
        let payload = &rest[1..1 + take];
        input = &rest[1 + take..];

        match op % 6 {
            0 => {
                buf.append(payload);
                model.extend_from_slice(payload);
            }
            1 => {
                buf.prepend(payload);
                let mut rebuilt = payload.to_vec();
                rebuilt.extend_from_slice(&model);
                model = rebuilt;
            }
            2 => {
                let pos = if model.is_empty() {
                    0
                } else {
                    payload.first().copied().unwrap_or(0) as usize % (model.len() + 1)
                };
                buf.insert(pos, payload);
                let mut rebuilt = model[..pos].to_vec();
                rebuilt.extend_from_slice(payload);
                rebuilt.extend_from_slice(&model[pos..]);
                model = rebuilt;
            }
            3 => {
                if !model.is_empty() {
                    let pos = payload.first().copied().unwrap_or(0) as usize % model.len();
                    let count = payload.get(1).copied().unwrap_or(1) as usize % (model.len() - pos + 1);
                    buf.erase(pos, count);
                    model.drain(pos..pos + count);
                }
            }
            4 => {
                buf.set(payload);
                model = payload.to_vec();
            }
            _ => {
                buf.clear();
                model.clear();
            }
        }

        assert_eq!(buf.as_slice(), model.as_slice());
        assert_eq!(buf.len(), model.len());
        assert!(buf.capacity() >= buf.len());
        assert_eq!(*buf.as_bytes_with_nul().last().unwrap(), 0);
    }

    let _ = buf.into_bytes();
});
