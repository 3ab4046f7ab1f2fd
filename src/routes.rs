use std::{str::FromStr, sync::Arc};

use axum::{
    extract::{Query, State as AxumState},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::{
    catalog,
    deck_matcher::find_decks_containing,
    error::AppError,
    gateway::CardQuery,
    models::{
        banlist::{Banlist, BanlistFormat},
        card::Card,
        deck::Deck,
        response::ApiResponse,
    },
    state::State,
};

type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

#[derive(Deserialize)]
pub struct SearchParams {
    q: Option<String>,
    archtype: Option<String>,
}

#[derive(Deserialize)]
pub struct CardInfoParams {
    id: Option<String>,
}

#[derive(Deserialize)]
pub struct BanlistParams {
    format: Option<String>,
}

#[derive(Deserialize)]
pub struct DecksByCardParams {
    card: Option<String>,
}

pub async fn search_cards_handler(
    AxumState(state): AxumState<Arc<State>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Vec<Card>> {
    let query = CardQuery::from_params(params.q.as_deref(), params.archtype.as_deref())
        .ok_or(AppError::MissingParam("'q' or 'archtype'"))?;

    let cards = state.gateway.search_cards(&query).await?;
    Ok(Json(ApiResponse::success(cards)))
}

pub async fn card_info_handler(
    AxumState(state): AxumState<Arc<State>>,
    Query(params): Query<CardInfoParams>,
) -> ApiResult<Card> {
    let id = params
        .id
        .filter(|id| !id.is_empty())
        .ok_or(AppError::MissingParam("'id'"))?;

    let card = state.gateway.card_info(&id).await?;
    Ok(Json(ApiResponse::success(card)))
}

pub async fn archetypes_handler(AxumState(state): AxumState<Arc<State>>) -> ApiResult<Vec<String>> {
    let archetypes = state.gateway.archetypes().await?;
    Ok(Json(ApiResponse::success(archetypes)))
}

fn parse_format(format: Option<&str>) -> Result<Option<BanlistFormat>, AppError> {
    match format.map(str::trim) {
        None | Some("") => Ok(None),
        Some(all) if all.eq_ignore_ascii_case("all") => Ok(None),
        Some(format) => BanlistFormat::from_str(format)
            .map(Some)
            .map_err(|_| AppError::UnknownFormat(format.to_string())),
    }
}

pub async fn banlist_handler(
    Query(params): Query<BanlistParams>,
) -> ApiResult<Vec<&'static Banlist>> {
    let format = parse_format(params.format.as_deref())?;
    Ok(Json(ApiResponse::success(catalog::banlists_for(format))))
}

pub async fn top_decks_handler() -> Json<ApiResponse<&'static [Deck]>> {
    Json(ApiResponse::success(catalog::all_decks()))
}

pub async fn decks_by_card_handler(
    Query(params): Query<DecksByCardParams>,
) -> ApiResult<Vec<&'static Deck>> {
    let card = params
        .card
        .filter(|card| !card.trim().is_empty())
        .ok_or(AppError::MissingParam("'card'"))?;

    let decks = find_decks_containing(&card);
    info!("{} deck(s) contain {card:?}", decks.len());

    Ok(Json(ApiResponse::success(decks)))
}
