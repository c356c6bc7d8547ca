#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
    };
    ($run:block, $expected:expr, $msg:literal) => {
        match std::panic::catch_unwind(|| $run) {
            Ok(_) => panic!($msg),
            Err(payload) => assert_eq!(
                payload.downcast_ref::<String>().map(String::as_str),
                Some($expected.to_string().as_str()),
                "panicked with an unexpected message"
            ),
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
