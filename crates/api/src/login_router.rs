//! Login router: validate the request, ask the [`AuthService`], map the outcome
//! to an [`HttpResponse`].
//!
//! Decision order (first match wins):
//! 1. request or body absent → 500
//! 2. email absent/empty → 400 `MissingParamError("email")`
//! 3. password absent/empty → 400 `MissingParamError("password")`
//! 4. no auth service, or one that cannot authenticate → 500
//! 5. `authenticate` faults → 500, rejects → 401, accepts → 200

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use loginkit_auth::{AccessToken, AuthService, AuthServiceError};
use loginkit_core::MissingParamError;

use crate::http::{HttpRequest, HttpResponse};

/// Stateless apart from the injected collaborator; cheap to clone and share
/// across tasks.
#[derive(Clone)]
pub struct LoginRouter {
    auth_service: Option<Arc<dyn AuthService>>,
}

impl LoginRouter {
    pub fn new(auth_service: Option<Arc<dyn AuthService>>) -> Self {
        Self { auth_service }
    }

    pub fn with_auth_service(auth_service: impl AuthService + 'static) -> Self {
        Self::new(Some(Arc::new(auth_service)))
    }

    /// A router with nothing to delegate to. Every well-formed request gets a 500.
    pub fn without_auth_service() -> Self {
        Self::new(None)
    }

    pub fn route(&self, http_request: Option<&HttpRequest>) -> HttpResponse {
        let request_id = Uuid::now_v7();
        let span = tracing::info_span!("login", %request_id);
        let _guard = span.enter();

        let Some(body) = http_request.and_then(|req| req.body.as_ref()) else {
            tracing::error!("login called without a request body");
            return HttpResponse::server_error();
        };

        let Some(email) = present(body.email.as_deref()) else {
            tracing::debug!("rejecting login: email missing");
            return HttpResponse::bad_request(MissingParamError::new("email"));
        };

        let Some(password) = present(body.password.as_deref()) else {
            tracing::debug!("rejecting login: password missing");
            return HttpResponse::bad_request(MissingParamError::new("password"));
        };

        let Some(auth_service) = self.auth_service.as_deref() else {
            tracing::error!("login router has no auth service configured");
            return HttpResponse::server_error();
        };

        if !auth_service.can_authenticate() {
            tracing::error!("configured auth service cannot authenticate");
            return HttpResponse::server_error();
        }

        match authenticate(auth_service, email, password) {
            Ok(Some(token)) => {
                tracing::info!("login accepted");
                HttpResponse::ok(token)
            }
            Ok(None) => {
                tracing::info!("login rejected: invalid credentials");
                HttpResponse::unauthorized()
            }
            Err(fault) => {
                tracing::error!(error = %fault, "auth service fault");
                HttpResponse::server_error()
            }
        }
    }
}

impl core::fmt::Debug for LoginRouter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoginRouter")
            .field("auth_service", &self.auth_service.as_ref().map(|_| "<dyn AuthService>"))
            .finish()
    }
}

fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.is_empty())
}

#[derive(Debug, Error)]
enum AuthFault {
    #[error(transparent)]
    Service(#[from] AuthServiceError),

    #[error("auth service panicked: {0}")]
    Panicked(String),
}

/// Fault boundary around the collaborator call, and nothing else.
fn authenticate(
    auth_service: &dyn AuthService,
    email: &str,
    password: &str,
) -> Result<Option<AccessToken>, AuthFault> {
    match panic::catch_unwind(AssertUnwindSafe(|| auth_service.authenticate(email, password))) {
        Ok(outcome) => Ok(outcome?),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            Err(AuthFault::Panicked(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use loginkit_core::{LoginError, UnauthorizedError};

    use super::*;
    use crate::http::{LoginBody, ResponseBody};

    /// Records the credentials it was called with and answers with a fixed outcome.
    struct AuthServiceSpy {
        calls: Mutex<Vec<(String, String)>>,
        outcome: Result<Option<AccessToken>, AuthServiceError>,
    }

    impl AuthServiceSpy {
        fn returning(outcome: Result<Option<AccessToken>, AuthServiceError>) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                outcome,
            })
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl AuthService for AuthServiceSpy {
        fn authenticate(&self, email: &str, password: &str) -> Result<Option<AccessToken>, AuthServiceError> {
            self.calls
                .lock()
                .unwrap()
                .push((email.to_string(), password.to_string()));
            self.outcome.clone()
        }
    }

    struct NoAuthCapability;

    impl AuthService for NoAuthCapability {
        fn authenticate(&self, _email: &str, _password: &str) -> Result<Option<AccessToken>, AuthServiceError> {
            panic!("must not be called when can_authenticate() is false");
        }

        fn can_authenticate(&self) -> bool {
            false
        }
    }

    struct PanickingAuthService;

    impl AuthService for PanickingAuthService {
        fn authenticate(&self, _email: &str, _password: &str) -> Result<Option<AccessToken>, AuthServiceError> {
            panic!("connection pool poisoned");
        }
    }

    fn make_sut() -> (LoginRouter, Arc<AuthServiceSpy>) {
        let spy = AuthServiceSpy::returning(Ok(None));
        let sut = LoginRouter::new(Some(spy.clone() as Arc<dyn AuthService>));
        (sut, spy)
    }

    fn request(email: Option<&str>, password: Option<&str>) -> HttpRequest {
        HttpRequest::new(LoginBody {
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        })
    }

    fn missing(param: &'static str) -> Option<ResponseBody> {
        Some(ResponseBody::Error(LoginError::MissingParam(MissingParamError::new(param))))
    }

    #[test]
    fn returns_400_if_no_password_is_provided() {
        let (sut, spy) = make_sut();
        let res = sut.route(Some(&request(Some("any_email@mail.com"), None)));

        assert_eq!(res.status_code, 400);
        assert_eq!(res.body, missing("password"));
        assert!(spy.calls().is_empty());
    }

    #[test]
    fn returns_400_if_no_email_is_provided() {
        let (sut, _) = make_sut();
        let res = sut.route(Some(&request(None, Some("your_pwd"))));

        assert_eq!(res.status_code, 400);
        assert_eq!(res.body, missing("email"));
    }

    #[test]
    fn email_is_reported_first_when_both_are_missing() {
        let (sut, _) = make_sut();
        let res = sut.route(Some(&request(None, None)));

        assert_eq!(res.status_code, 400);
        assert_eq!(res.body, missing("email"));
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let (sut, spy) = make_sut();

        let res = sut.route(Some(&request(Some(""), Some("your_pwd"))));
        assert_eq!(res.body, missing("email"));

        let res = sut.route(Some(&request(Some("any_email@mail.com"), Some(""))));
        assert_eq!(res.body, missing("password"));

        assert!(spy.calls().is_empty());
    }

    #[test]
    fn returns_500_if_no_request_is_provided() {
        let (sut, _) = make_sut();
        let res = sut.route(None);
        assert_eq!(res.status_code, 500);
    }

    #[test]
    fn returns_500_if_request_has_no_body() {
        let (sut, _) = make_sut();
        let res = sut.route(Some(&HttpRequest::default()));
        assert_eq!(res.status_code, 500);
    }

    #[test]
    fn calls_auth_service_with_the_submitted_credentials() {
        let (sut, spy) = make_sut();
        sut.route(Some(&request(Some("any_email@mail.com"), Some("your_pwd"))));

        assert_eq!(
            spy.calls(),
            vec![("any_email@mail.com".to_string(), "your_pwd".to_string())]
        );
    }

    #[test]
    fn returns_401_when_invalid_credentials_are_provided() {
        let (sut, _) = make_sut();
        let res = sut.route(Some(&request(
            Some("invalid_email@mail.com"),
            Some("invalid_password"),
        )));

        assert_eq!(res.status_code, 401);
        assert_eq!(
            res.body,
            Some(ResponseBody::Error(LoginError::Unauthorized(UnauthorizedError)))
        );
    }

    #[test]
    fn returns_200_with_the_token_when_credentials_are_valid() {
        let spy = AuthServiceSpy::returning(Ok(Some(AccessToken::new("valid_token"))));
        let sut = LoginRouter::new(Some(spy as Arc<dyn AuthService>));
        let res = sut.route(Some(&request(Some("valid_email@mail.com"), Some("valid_password"))));

        assert_eq!(res.status_code, 200);
        assert_eq!(
            res.body,
            Some(ResponseBody::AccessToken(AccessToken::new("valid_token")))
        );
    }

    #[test]
    fn returns_500_if_no_auth_service_is_provided() {
        let sut = LoginRouter::without_auth_service();
        let res = sut.route(Some(&request(Some("any@mail.com"), Some("any_password"))));
        assert_eq!(res.status_code, 500);
    }

    #[test]
    fn returns_500_if_auth_service_cannot_authenticate() {
        let sut = LoginRouter::with_auth_service(NoAuthCapability);
        let res = sut.route(Some(&request(Some("any@mail.com"), Some("any_password"))));
        assert_eq!(res.status_code, 500);
    }

    #[test]
    fn missing_params_win_over_missing_auth_service() {
        let sut = LoginRouter::without_auth_service();
        let res = sut.route(Some(&request(Some("any@mail.com"), None)));
        assert_eq!(res.status_code, 400);
        assert_eq!(res.body, missing("password"));
    }

    #[test]
    fn returns_500_if_auth_service_errors() {
        let spy = AuthServiceSpy::returning(Err(AuthServiceError::backend("user store offline")));
        let sut = LoginRouter::new(Some(spy as Arc<dyn AuthService>));
        let res = sut.route(Some(&request(Some("any@mail.com"), Some("any_password"))));

        assert_eq!(res, HttpResponse::server_error());
    }

    #[test]
    fn returns_500_if_auth_service_panics() {
        let sut = LoginRouter::with_auth_service(PanickingAuthService);
        let res = sut.route(Some(&request(Some("any@mail.com"), Some("any_password"))));
        assert_eq!(res.status_code, 500);
    }

    #[test]
    fn debug_does_not_expose_the_collaborator() {
        let (sut, _) = make_sut();
        assert_eq!(
            format!("{sut:?}"),
            r#"LoginRouter { auth_service: Some("<dyn AuthService>") }"#
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 64,
                .. ProptestConfig::default()
            })]

            #[test]
            fn credentials_are_passed_through_unchanged(
                email in ".{1,40}",
                password in ".{1,40}",
            ) {
                let (sut, spy) = make_sut();
                sut.route(Some(&request(Some(&email), Some(&password))));
                prop_assert_eq!(spy.calls(), vec![(email, password)]);
            }

            #[test]
            fn routing_is_idempotent(
                email in proptest::option::of(".{0,20}"),
                password in proptest::option::of(".{0,20}"),
                accept in any::<bool>(),
            ) {
                let outcome = if accept { Some(AccessToken::new("tok")) } else { None };
                let sut = LoginRouter::with_auth_service(AuthServiceSpy::returning(Ok(outcome)));
                let req = request(email.as_deref(), password.as_deref());

                let first = sut.route(Some(&req));
                let second = sut.route(Some(&req));
                prop_assert_eq!(first, second);
            }
        }
    }
}
