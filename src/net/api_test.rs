use super::*;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn login_endpoint_targets_backend_base() {
    assert_eq!(login_endpoint(), "http://localhost:8000/login");
}

#[test]
fn signup_endpoint_targets_backend_base() {
    assert_eq!(signup_endpoint(), "http://localhost:8000/signup");
}

#[test]
fn city_weather_endpoint_embeds_city_and_token() {
    assert_eq!(
        city_weather_endpoint("Paris", "T1"),
        "http://localhost:8000/weather/Paris?id_token=T1"
    );
}

#[test]
fn coordinate_weather_endpoint_embeds_lat_lon_and_token() {
    assert_eq!(
        coordinate_weather_endpoint(48.85, 2.35, "T1"),
        "http://localhost:8000/weather/current?lat=48.85&lon=2.35&id_token=T1"
    );
}

// =============================================================
// Off-browser stubs
// =============================================================

#[cfg(not(feature = "csr"))]
mod stubs {
    use super::super::*;
    use crate::net::types::ApiError;

    fn block_on<F: Future>(future: F) -> F::Output {
        // The stub futures resolve immediately; poll once with a no-op waker.
        use std::pin::pin;
        use std::task::{Context, Poll, Waker};

        let mut future = pin!(future);
        let waker = Waker::noop();
        let mut cx = Context::from_waker(waker);
        match future.as_mut().poll(&mut cx) {
            Poll::Ready(value) => value,
            Poll::Pending => unreachable!("stub future should resolve synchronously"),
        }
    }

    #[test]
    fn login_stub_reports_transport_error() {
        let result = block_on(login("a@b.com", "pw"));
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }

    #[test]
    fn weather_by_city_stub_reports_transport_error() {
        let result = block_on(weather_by_city("Paris", "T1"));
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
