//! Event domain model and field parameters.

use sea_orm::{ActiveValue, DbErr, EntityTrait};

use crate::{
    model::event::{EventDto, EventFieldsDto},
    server::{
        error::AppError,
        model::resource::{set_if_supplied, Resource},
        util::validate::non_blank,
    },
};

/// An in-game event and what it takes to take part.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub name: Option<String>,
    pub event_type: Option<String>,
    pub requirements: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFields {
    pub name: Option<Option<String>>,
    pub event_type: Option<Option<String>>,
    pub requirements: Option<Option<String>>,
}

impl EventFields {
    pub fn from_dto(dto: EventFieldsDto) -> Result<Self, AppError> {
        Ok(Self {
            name: non_blank("name", dto.name)?,
            event_type: dto.event_type,
            requirements: dto.requirements,
        })
    }
}

impl Resource for Event {
    type Entity = entity::prelude::Event;
    type Model = entity::event::Model;
    type ActiveModel = entity::event::ActiveModel;
    type Fields = EventFields;
    type Dto = EventDto;

    const LABEL: &'static str = "Event";

    fn id_column() -> <Self::Entity as EntityTrait>::Column {
        entity::event::Column::Id
    }

    fn new_active_model(fields: EventFields) -> entity::event::ActiveModel {
        entity::event::ActiveModel {
            name: ActiveValue::Set(fields.name.flatten()),
            event_type: ActiveValue::Set(fields.event_type.flatten()),
            requirements: ActiveValue::Set(fields.requirements.flatten()),
            ..Default::default()
        }
    }

    fn apply_fields(active: &mut entity::event::ActiveModel, fields: EventFields) {
        set_if_supplied(&mut active.name, fields.name);
        set_if_supplied(&mut active.event_type, fields.event_type);
        set_if_supplied(&mut active.requirements, fields.requirements);
    }

    fn from_entity(model: entity::event::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: model.id,
            name: model.name,
            event_type: model.event_type,
            requirements: model.requirements,
        })
    }

    fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            name: self.name,
            event_type: self.event_type,
            requirements: self.requirements,
        }
    }
}
