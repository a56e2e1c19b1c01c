// CORS中间件配置
// 商家端页面在浏览器侧直接访问API，开发环境允许本机源

use actix_cors::Cors;
use actix_web::http::header;

/// 创建CORS中间件
///
/// 开发环境允许本机源；生产部署通常由同源反向代理承接，
/// 不需要放开其他域名
pub fn create_cors() -> Cors {
    Cors::default()
        .allowed_origin_fn(|origin, _req_head| {
            origin.as_bytes().starts_with(b"http://localhost")
                || origin.as_bytes().starts_with(b"https://localhost")
                || origin.as_bytes().starts_with(b"http://127.0.0.1")
                || origin.as_bytes().starts_with(b"https://127.0.0.1")
        })
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
