#![no_main]

use libfuzzer_sys::fuzz_target;
use soundalike_math::{cap_one, mean, mean_u64, round_f64, safe_div};

const MAX_INPUT_SIZE: usize = 16 * 1024;

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
    let value = f64::from_bits(read_u64(data.get(1..9).unwrap_or(&[])));
    if !value.is_finite() {
        return;
    }

    let rounded_once = round_f64(value, decimals);
    assert_eq!(rounded_once, round_f64(rounded_once, decimals));
    assert_eq!(safe_div(value, 0.0), 0.0);
    assert!(cap_one(value) <= 1.0);

    let values: Vec<u64> = data.get(9..).unwrap_or(&[]).iter().map(|b| *b as u64).collect();
    let m = mean_u64(&values);
    if let (Some(lo), Some(hi)) = (values.iter().min(), values.iter().max()) {
        assert!(m >= *lo as f64 && m <= *hi as f64);
    } else {
        assert_eq!(m, 0.0);
    }

    let floats: Vec<f64> = values.iter().map(|v| *v as f64).collect();
    assert_eq!(mean(&floats), m);
});
