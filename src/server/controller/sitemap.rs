use utoipa::openapi::{path::PathItem, OpenApi};

use crate::model::api::{EndpointDto, SitemapDto};

/// Builds the sitemap served at `/` from the registered OpenAPI paths.
///
/// Endpoints are ordered by path, then by method in the order GET, POST, PUT, PATCH, DELETE.
pub fn build_sitemap(api: &OpenApi) -> SitemapDto {
    let mut endpoints = Vec::new();

    for (path, item) in api.paths.paths.iter() {
        for method in methods(item) {
            endpoints.push(EndpointDto {
                method: method.to_string(),
                path: path.clone(),
            });
        }
    }

    SitemapDto { endpoints }
}

fn methods(item: &PathItem) -> Vec<&'static str> {
    [
        ("GET", item.get.is_some()),
        ("POST", item.post.is_some()),
        ("PUT", item.put.is_some()),
        ("PATCH", item.patch.is_some()),
        ("DELETE", item.delete.is_some()),
    ]
    .into_iter()
    .filter_map(|(method, registered)| registered.then_some(method))
    .collect()
}
