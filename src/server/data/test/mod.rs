use crate::server::{
    data::resource::ResourceRepository,
    model::{
        character::{Character, CharacterFields},
        club::{Club, ClubFields},
        event::{Event, EventFields},
        news::{News, NewsFields},
        spell::{Spell, SpellFields},
    },
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
