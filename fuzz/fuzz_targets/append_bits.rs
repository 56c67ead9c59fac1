#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|writes: Vec<(u64, u8)>| {
    let mut packer = bitpacker::BitPacker::new();
    let mut model = Vec::new();
    for &(value, nbits) in &writes {
        let nbits = nbits % 65;
        packer.append_bits(value, nbits);
        model.extend((0..nbits).map(|i| (value >> i) & 1 != 0));
    }

    assert!(packer.iter().eq(model.iter().copied()));
    let rebuilt = bitpacker::BitPacker::from_bytes(packer.to_bytes(), packer.len()).unwrap();
    assert_eq!(rebuilt, packer);
});
