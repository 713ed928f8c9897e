#![no_main]

use libfuzzer_sys::fuzz_target;
use tokdup_math::{relative_deviation_pct, round_f64, safe_ratio, to_percent};

const MAX_INPUT_SIZE: usize = 1024;

fn read_u64(bytes: &[u8]) -> u64 {
    let mut arr = [0u8; 8];
    let len = bytes.len().min(8);
    arr[..len].copy_from_slice(&bytes[..len]);
    u64::from_le_bytes(arr)
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > MAX_INPUT_SIZE {
        return;
    }

    let decimals = (data[0] % 10) as u32;
    let numer = read_u64(data.get(1..9).unwrap_or(&[])) as usize;
    let denom = read_u64(data.get(9..17).unwrap_or(&[])) as usize;

    let value = f64::from_bits(read_u64(data.get(17..25).unwrap_or(&[])));
    if !value.is_finite() || value.abs() > 1e12 {
        return;
    }

    let rounded_once = round_f64(value, decimals);
    let rounded_twice = round_f64(rounded_once, decimals);
    assert_eq!(rounded_once, rounded_twice);

    if denom == 0 {
        assert_eq!(safe_ratio(numer, denom), 0.0);
    }
    if numer > 0 {
        assert_eq!(safe_ratio(numer, numer), 1.0);
    }

    let small = (numer % 100_000, denom % 100_000);
    let dev = relative_deviation_pct(small.0, small.1);
    assert!(dev >= 0.0);
    assert_eq!(relative_deviation_pct(small.0, small.0), 0.0);
    if small.0 > 0 {
        assert!(dev.is_finite());
    }

    let fraction = safe_ratio(small.0.min(small.1), small.0.max(small.1));
    let pct = to_percent(fraction);
    assert!((0.0..=100.0).contains(&pct));
});
