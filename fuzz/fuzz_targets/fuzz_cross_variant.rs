#![no_main]

use libfuzzer_sys::fuzz_target;

use bm1pi_core::batch::{to_gaussian_portable, BatchConverter};
use bm1pi_core::converter::ForwardConverter;
use bm1pi_core::recurrence::RecurrenceConverter;
use bm1pi_core::scalar::ScalarConverter;
use bm1pi_core::DigitString;

fuzz_target!(|data: [u8; 16]| {
    let digits = DigitString::new(u128::from_le_bytes(data));

    let scalar = ScalarConverter::new().to_gaussian(digits);
    let batch = BatchConverter::new().to_gaussian(digits);
    let recurrence = RecurrenceConverter::new().to_gaussian(digits);
    let portable = to_gaussian_portable(digits);

    assert_eq!(scalar, batch, "Scalar != Batch for {digits}");
    assert_eq!(scalar, recurrence, "Scalar != Recurrence for {digits}");
    assert_eq!(scalar, portable, "Scalar != portable batch for {digits}");
});
