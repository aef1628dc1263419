//! `LINALG_EPSILON` is read once per process, so this binary holds a single test.

use linear_algebra::{approx::eq_approx, vec2, Error, Float};

#[test]
fn override_from_environment() {
    std::env::set_var("LINALG_EPSILON", "0.01");

    assert_eq!(<f64 as Float>::epsilon(), 0.01);
    assert_eq!(<f32 as Float>::epsilon(), 0.01f64 as f32);
    assert!(eq_approx(1.0, 1.005));
    assert!(!eq_approx(1.0, 1.02));
    assert!(vec2(1.0, 2.0).eq_approx(&vec2(1.009, 1.991)));
    assert_eq!(vec2(1.0, 2.0).try_div(0.005), Err(Error::ZeroDivisor));
    assert!(vec2(1.0, 2.0).try_div(0.02).is_ok());
}
