use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dao::models::{GameDraft, GameEntity, GameId, Genre},
    dto::validation::validate_genres,
};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Game fields accepted by the create and update routes.
///
/// The record identifier is never part of the payload; the store assigns it
/// on insert and the route path carries it on update.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GamePayload {
    /// Display title, at most 64 characters.
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    /// Catalog blurb, at most 256 characters.
    #[validate(length(min = 1, max = 256))]
    pub description: String,
    /// Engine name, when known.
    #[serde(default)]
    #[validate(length(min = 1, max = 64))]
    pub engine: Option<String>,
    /// Developing studio, at most 64 characters.
    #[validate(length(min = 1, max = 64))]
    pub developer: String,
    /// One to four genre tags, no duplicates.
    #[validate(length(min = 1, max = 4), custom(function = validate_genres))]
    pub genres: Vec<Genre>,
    /// Cover artwork URL, when the catalog has one.
    #[serde(default)]
    #[validate(length(max = 256), url)]
    pub cover_image_url: Option<String>,
    /// Release date as an ISO-8601 calendar date.
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date, example = "2017-03-03")]
    pub release_date: Date,
}

/// Game record returned by the read and create routes.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    /// Store-assigned identifier.
    pub id: GameId,
    /// Display title.
    pub name: String,
    /// Catalog blurb.
    pub description: String,
    /// Engine name, when known.
    pub engine: Option<String>,
    /// Developing studio.
    pub developer: String,
    /// Genre tags in stored order.
    pub genres: Vec<Genre>,
    /// Cover artwork URL, when the catalog has one.
    pub cover_image_url: Option<String>,
    /// Release date as an ISO-8601 calendar date.
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date, example = "2017-03-03")]
    pub release_date: Date,
}

impl From<GamePayload> for GameDraft {
    fn from(payload: GamePayload) -> Self {
        Self {
            name: payload.name,
            description: payload.description,
            engine: payload.engine,
            developer: payload.developer,
            genres: payload.genres,
            cover_image_url: payload.cover_image_url,
            release_date: payload.release_date,
        }
    }
}

impl From<GameEntity> for GameResponse {
    fn from(entity: GameEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            engine: entity.engine,
            developer: entity.developer,
            genres: entity.genres,
            cover_image_url: entity.cover_image_url,
            release_date: entity.release_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::date;

    use super::*;

    fn payload_from(value: serde_json::Value) -> GamePayload {
        serde_json::from_value(value).expect("payload deserializes")
    }

    fn valid_payload() -> serde_json::Value {
        json!({
            "name": "Hollow Knight",
            "description": "A challenging action-adventure through the ruined kingdom of Hallownest.",
            "engine": "Unity",
            "developer": "Team Cherry",
            "genres": ["Action", "Platformer"],
            "coverImageUrl": "https://example.com/hollow-knight.png",
            "releaseDate": "2017-02-24"
        })
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let payload = payload_from(valid_payload());

        assert_eq!(payload.name, "Hollow Knight");
        assert_eq!(payload.genres, vec![Genre::Action, Genre::Platformer]);
        assert_eq!(
            payload.cover_image_url.as_deref(),
            Some("https://example.com/hollow-knight.png")
        );
        assert_eq!(payload.release_date, date!(2017 - 02 - 24));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let mut value = valid_payload();
        value.as_object_mut().unwrap().remove("engine");
        value.as_object_mut().unwrap().remove("coverImageUrl");

        let payload = payload_from(value);
        assert!(payload.engine.is_none());
        assert!(payload.cover_image_url.is_none());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn oversized_name_is_rejected() {
        let mut value = valid_payload();
        value["name"] = json!("x".repeat(65));

        let errors = payload_from(value).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn more_than_four_genres_is_rejected() {
        let mut value = valid_payload();
        value["genres"] = json!(["Action", "Adventure", "Sandbox", "Rpg", "Strategy"]);

        let errors = payload_from(value).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("genres"));
    }

    #[test]
    fn duplicate_genres_are_rejected() {
        let mut value = valid_payload();
        value["genres"] = json!(["Action", "Action"]);

        let errors = payload_from(value).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("genres"));
    }

    #[test]
    fn empty_genre_list_is_rejected() {
        let mut value = valid_payload();
        value["genres"] = json!([]);

        let errors = payload_from(value).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("genres"));
    }

    #[test]
    fn malformed_cover_url_is_rejected() {
        let mut value = valid_payload();
        value["coverImageUrl"] = json!("not a url");

        let errors = payload_from(value).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("cover_image_url"));
    }

    #[test]
    fn response_serializes_date_as_iso_string() {
        let entity = GameEntity {
            id: 7,
            name: "Hollow Knight".into(),
            description: "Bug knight explores Hallownest.".into(),
            engine: None,
            developer: "Team Cherry".into(),
            genres: vec![Genre::Platformer],
            cover_image_url: None,
            release_date: date!(2017 - 02 - 24),
        };

        let value = serde_json::to_value(GameResponse::from(entity)).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["releaseDate"], "2017-02-24");
        assert_eq!(value["genres"], json!(["Platformer"]));
        assert_eq!(value["coverImageUrl"], serde_json::Value::Null);
    }
}
