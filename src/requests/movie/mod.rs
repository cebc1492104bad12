use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{
    MAX_DIRECTOR_LENGTH, MAX_DURATION, MAX_TITLE_LENGTH, MAX_YEAR, MIN_DURATION, MIN_YEAR,
    Validator,
};

/// Payload for creating or updating a movie
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct MovieRequest {
    #[schema(example = "The Grand Escape")]
    pub title: String,
    #[schema(example = "Maria Vega")]
    pub director: String,
    #[schema(example = 2019)]
    pub year: i32,
    /// Runtime in minutes
    #[schema(example = 128)]
    pub duration: i32,
    #[schema(example = "Drama")]
    pub genre: String,
}

impl MovieRequest {
    /// Validates the movie request
    ///
    /// Validates:
    /// - title: required, at most 150 characters
    /// - director: required, at most 50 characters
    /// - year: between 1800 and 2100
    /// - duration: between 1 and 500 minutes
    /// - genre: one of the catalog genres
    ///
    /// Returns Ok(()) if all validations pass, Err(Vec<String>) with error
    /// messages otherwise
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push("Title is required".to_string());
        } else if !Validator::validate_length(title, 1, MAX_TITLE_LENGTH) {
            errors.push(format!(
                "Title must be at most {} characters",
                MAX_TITLE_LENGTH
            ));
        }

        let director = self.director.trim();
        if director.is_empty() {
            errors.push("Director is required".to_string());
        } else if !Validator::validate_length(director, 1, MAX_DIRECTOR_LENGTH) {
            errors.push(format!(
                "Director must be at most {} characters",
                MAX_DIRECTOR_LENGTH
            ));
        }

        if !Validator::validate_year(self.year) {
            errors.push(format!(
                "Year must be between {} and {}",
                MIN_YEAR, MAX_YEAR
            ));
        }

        if !Validator::validate_duration(self.duration) {
            errors.push(format!(
                "Duration must be between {} and {} minutes",
                MIN_DURATION, MAX_DURATION
            ));
        }

        if !Validator::validate_genre(&self.genre) {
            errors.push(format!("Unknown genre '{}'", self.genre.trim()));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
