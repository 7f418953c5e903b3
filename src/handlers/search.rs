use actix_web::{web, HttpResponse, Result};

use crate::models::{SearchParams, SearchRequest, TopResultsParams};
use crate::utils::coerce_optional_int;
use crate::AppState;

pub async fn search(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> Result<HttpResponse> {
    let params = params.into_inner();
    let request = SearchRequest {
        query: params.q,
        page: coerce_optional_int(params.page.as_deref()),
        page_size: coerce_optional_int(params.page_size.as_deref()),
    };

    let envelope = state.search.search(request).await;
    Ok(HttpResponse::Ok().json(envelope))
}

pub async fn top_results(
    state: web::Data<AppState>,
    params: web::Query<TopResultsParams>,
) -> Result<HttpResponse> {
    let items = state.search.fetch_top_results(&params.q).await;
    Ok(HttpResponse::Ok().json(items))
}
