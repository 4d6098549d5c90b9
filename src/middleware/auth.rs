use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, HttpResponse,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::sync::Arc;

use crate::error::AppError;
use crate::utils::{ApiResponse, JwtManager};

/// Resolves the bearer token into `Claims` stored in the request extensions.
pub struct AuthMiddleware {
    jwt_manager: Arc<JwtManager>,
}

impl AuthMiddleware {
    pub fn new(jwt_manager: Arc<JwtManager>) -> Self {
        Self { jwt_manager }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service,
            jwt_manager: self.jwt_manager.clone(),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    jwt_manager: Arc<JwtManager>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "));

        let rejection = match token {
            Some(token) => match self.jwt_manager.verify_access_token(token) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    let fut = self.service.call(req);
                    return Box::pin(async move {
                        let res = fut.await?;
                        Ok(res.map_into_left_body())
                    });
                }
                Err(AppError::TokenExpired) => {
                    ApiResponse::<()>::error_with_code("TOKEN_EXPIRED", "Session has expired")
                }
                Err(_) => ApiResponse::<()>::error_with_code("INVALID_TOKEN", "Invalid session token"),
            },
            None => ApiResponse::<()>::error_with_code("UNAUTHORIZED", "Authorization header missing"),
        };

        let response = HttpResponse::Unauthorized().json(rejection);
        Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) })
    }
}
