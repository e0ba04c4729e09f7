#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use zune_pfm::zune_core::bytestream::ZCursor;
    use zune_pfm::zune_core::options::DecoderOptions;

    // keep allocations small, the header alone can ask for gigabytes
    let options = DecoderOptions::default()
        .set_max_width(1024)
        .set_max_height(1024);
    let mut decoder = zune_pfm::PfmDecoder::new_with_options(ZCursor::new(data), options);
    let _ = decoder.decode();
});
