use axum::{routing::get, Router};
use utoipa::OpenApi;

use crate::server::{
    controller::{
        character::{self, CHARACTER_TAG},
        club::{self, CLUB_TAG},
        event::{self, EVENT_TAG},
        index::{index, openapi},
        news::{self, NEWS_TAG},
        spell::{self, SPELL_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Companion API", description = "CRUD collections for the game companion app"),
    paths(
        news::get_news,
        news::get_news_by_id,
        news::create_news,
        news::update_news,
        news::delete_news,
        spell::get_spells,
        spell::get_spell_by_id,
        spell::create_spell,
        spell::update_spell,
        spell::delete_spell,
        club::get_clubs,
        club::get_club_by_id,
        club::create_club,
        club::update_club,
        club::delete_club,
        character::get_characters,
        character::get_character_by_id,
        character::create_character,
        character::update_character,
        character::delete_character,
        event::get_events,
        event::get_event_by_id,
        event::create_event,
        event::update_event,
        event::delete_event,
    ),
    tags(
        (name = NEWS_TAG, description = "Dated announcements"),
        (name = SPELL_TAG, description = "Spells and where to farm them"),
        (name = CLUB_TAG, description = "Club listings and rankings"),
        (name = CHARACTER_TAG, description = "Characters and their builds"),
        (name = EVENT_TAG, description = "In-game events"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api-docs/openapi.json", get(openapi))
        .route("/news", get(news::get_news).post(news::create_news))
        .route(
            "/news/{id}",
            get(news::get_news_by_id)
                .put(news::update_news)
                .delete(news::delete_news),
        )
        .route("/spells", get(spell::get_spells).post(spell::create_spell))
        .route(
            "/spells/{id}",
            get(spell::get_spell_by_id)
                .put(spell::update_spell)
                .delete(spell::delete_spell),
        )
        .route("/club", get(club::get_clubs).post(club::create_club))
        .route(
            "/club/{id}",
            get(club::get_club_by_id)
                .put(club::update_club)
                .delete(club::delete_club),
        )
        .route(
            "/character",
            get(character::get_characters).post(character::create_character),
        )
        .route(
            "/character/{id}",
            get(character::get_character_by_id)
                .put(character::update_character)
                .delete(character::delete_character),
        )
        .route("/event", get(event::get_events).post(event::create_event))
        .route(
            "/event/{id}",
            get(event::get_event_by_id)
                .put(event::update_event)
                .delete(event::delete_event),
        )
}
