#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdrv_core::constants::{MAX_POSITION, UNKNOWN_SELECTOR_RESULT};
use fibdrv_device::{Device, Request, Response, Whence};

fuzz_target!(|data: &[u8]| {
    let device = Device::default();
    let Ok(mut session) = device.open() else {
        return;
    };

    // Each 9-byte chunk is one request: tag byte then an i64 operand.
    for chunk in data.chunks_exact(9) {
        let operand = i64::from_le_bytes(chunk[1..9].try_into().unwrap());
        let request = match chunk[0] % 5 {
            0 => Request::Seek { offset: operand, whence: Whence::Start },
            1 => Request::Seek { offset: operand, whence: Whence::Current },
            2 => Request::Seek { offset: operand, whence: Whence::End },
            3 => Request::Write { selector: operand.unsigned_abs() % 8 },
            _ => Request::Read,
        };

        let before = session.position();
        match session.handle(request).unwrap() {
            Response::Position(p) => assert!((0..=MAX_POSITION).contains(&p)),
            Response::Elapsed(ns) => {
                if !(1..=3).contains(&(operand.unsigned_abs() % 8)) {
                    assert_eq!(ns, UNKNOWN_SELECTOR_RESULT);
                }
                assert_eq!(session.position(), before);
            }
            Response::Value(digits) => {
                assert!(!digits.is_empty());
                assert!(digits.iter().all(u8::is_ascii_digit));
                assert!(digits.len() == 1 || digits[0] != b'0');
            }
        }
    }

    assert!(device.open().is_err());
    session.close();
    assert!(device.open().is_ok());
});
