#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<bool>, usize)| {
    let (bits, cut) = input;
    let mut packer: bitpacker::BitPacker = bits.iter().copied().collect();

    assert_eq!(packer.len(), bits.len());
    assert_eq!(packer.as_bytes().len(), (bits.len() + 7) / 8);
    assert!(packer.iter().eq(bits.iter().copied()));

    let cut = cut % (bits.len() + 1);
    packer.truncate(cut);
    packer.pad_to_byte();
    let expected: Vec<bool> = bits[..cut]
        .iter()
        .copied()
        .chain(std::iter::repeat(false))
        .take(packer.len())
        .collect();
    assert!(packer.iter().eq(expected));
});
