#![no_main]

use libfuzzer_sys::fuzz_target;
use strata::frame::{FrameDecoder, FrameReader};
use strata::Limits;

fuzz_target!(|data: (&[u8], u8)| {
    let (stream, split) = data;
    let limits = Limits::builder().max_frame_len(1 << 16).build();

    let read: Vec<_> = FrameReader::with_limits(stream, limits).collect();

    // Feeding the same bytes in two chunks must produce the same results.
    let mut decoder = FrameDecoder::with_limits(limits);
    let split = usize::from(split).min(stream.len());
    let mut fed = Vec::new();
    for chunk in [&stream[..split], &stream[split..]] {
        decoder.feed(chunk);
        loop {
            match decoder.next_value() {
                Ok(Some(value)) => fed.push(Ok(value)),
                Ok(None) => break,
                Err(err) => {
                    fed.push(Err(err));
                    break;
                }
            }
        }
        if matches!(fed.last(), Some(Err(_))) {
            break;
        }
    }
    if !matches!(fed.last(), Some(Err(_))) {
        if let Err(err) = decoder.finish() {
            fed.push(Err(err));
        }
    }

    assert_eq!(read.len(), fed.len());
    for (a, b) in read.iter().zip(&fed) {
        match (a, b) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => panic!("frame reader and decoder disagree"),
        }
    }
});
