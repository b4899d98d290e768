//! News domain model and field parameters.
//!
//! News posts are dated announcements (patch notes, maintenance windows) shown on the
//! companion app's front page.

use chrono::NaiveDate;
use sea_orm::{ActiveValue, DbErr, EntityTrait};

use crate::{
    model::news::{NewsDto, NewsFieldsDto},
    server::model::resource::{set_if_supplied, Resource},
};

/// A stored news post.
#[derive(Debug, Clone, PartialEq)]
pub struct News {
    /// Store-assigned identity.
    pub id: i32,
    /// Calendar date the post refers to.
    pub date: Option<NaiveDate>,
    /// Body text of the post.
    pub description: Option<String>,
}

/// Partial set of news fields supplied on create or update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsFields {
    pub date: Option<Option<NaiveDate>>,
    pub description: Option<Option<String>>,
}

impl From<NewsFieldsDto> for NewsFields {
    /// News has no constraints beyond what the DTO types already enforce.
    fn from(dto: NewsFieldsDto) -> Self {
        Self {
            date: dto.date,
            description: dto.description,
        }
    }
}

impl Resource for News {
    type Entity = entity::prelude::News;
    type Model = entity::news::Model;
    type ActiveModel = entity::news::ActiveModel;
    type Fields = NewsFields;
    type Dto = NewsDto;

    const LABEL: &'static str = "News";

    fn id_column() -> <Self::Entity as EntityTrait>::Column {
        entity::news::Column::Id
    }

    fn new_active_model(fields: NewsFields) -> entity::news::ActiveModel {
        entity::news::ActiveModel {
            date: ActiveValue::Set(fields.date.flatten()),
            description: ActiveValue::Set(fields.description.flatten()),
            ..Default::default()
        }
    }

    fn apply_fields(active: &mut entity::news::ActiveModel, fields: NewsFields) {
        set_if_supplied(&mut active.date, fields.date);
        set_if_supplied(&mut active.description, fields.description);
    }

    fn from_entity(model: entity::news::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: model.id,
            date: model.date,
            description: model.description,
        })
    }

    fn into_dto(self) -> NewsDto {
        NewsDto {
            id: self.id,
            date: self.date,
            description: self.description,
        }
    }
}
