//! 路由注册
//! 创建所有 API 路由并应用中间件

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post, put, MethodRouter},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
};

use crate::{
    auth::{admin_only_middleware, jwt_auth_middleware, JwtService},
    handlers,
    middleware::{request_tracking_middleware, AppState},
};

type StateRouter = MethodRouter<Arc<AppState>>;

/// 创建应用路由
pub fn create_router(state: Arc<AppState>) -> Router {
    let jwt = state.jwt_service.clone();
    let protect_catalog = state.config.security.protect_catalog_writes;

    if !protect_catalog {
        tracing::warn!("Catalog write routes are reachable without authentication");
    }

    // 图书增删改，默认需要管理员令牌
    let catalog_write = |method_router: StateRouter| {
        if protect_catalog {
            require_admin(&jwt, method_router)
        } else {
            method_router
        }
    };

    // 认证中间件只挂在已匹配的方法上，未知路径和方法仍返回 404/405
    let mut router = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route(
            "/books",
            get(handlers::books::list_books).merge(catalog_write(post(handlers::books::add_book))),
        )
        .route(
            "/books/{id}",
            get(handlers::books::get_book).merge(catalog_write(
                put(handlers::books::update_book).delete(handlers::books::delete_book),
            )),
        )
        // 订单路由，需要认证；角色和归属在服务层检查
        .route(
            "/orders",
            require_auth(
                &jwt,
                get(handlers::orders::get_all_orders).post(handlers::orders::create_order),
            ),
        )
        .route(
            "/orders/user/{user_id}",
            require_auth(&jwt, get(handlers::orders::get_user_orders)),
        )
        .route(
            "/orders/{id}",
            require_auth(&jwt, get(handlers::orders::get_order_by_id)),
        )
        .layer(RequestBodyLimitLayer::new(state.config.server.body_limit_bytes))
        .layer(CompressionLayer::new())
        .layer(from_fn(request_tracking_middleware));

    if state.config.server.cors_allow_any {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}

/// 要求有效令牌
fn require_auth(jwt: &Arc<JwtService>, method_router: StateRouter) -> StateRouter {
    method_router.route_layer(from_fn_with_state(jwt.clone(), jwt_auth_middleware))
}

/// 要求管理员令牌，jwt 层在外，先于角色检查执行
fn require_admin(jwt: &Arc<JwtService>, method_router: StateRouter) -> StateRouter {
    let method_router = method_router.route_layer(from_fn(admin_only_middleware));
    require_auth(jwt, method_router)
}
