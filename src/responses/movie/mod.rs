use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entities::movies;

/// Movie as returned by the API
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct Movie {
    pub id: i32,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<movies::Model> for Movie {
    fn from(val: movies::Model) -> Self {
        Movie {
            id: val.id,
            title: val.title,
            director: val.director,
            year: val.year,
            duration: val.duration,
            genre: val.genre,
            created_at: val.created_at,
            updated_at: val.updated_at,
        }
    }
}

impl From<&movies::Model> for Movie {
    fn from(val: &movies::Model) -> Self {
        val.clone().into()
    }
}

/// Column the listing is ordered by
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MoviePaginationOrder {
    #[default]
    Title,
    Director,
    Year,
    CreatedAt,
}

/// Sort direction of the listing
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MoviePaginationSort {
    #[default]
    Asc,
    Desc,
}

impl From<MoviePaginationSort> for sea_orm::Order {
    fn from(val: MoviePaginationSort) -> Self {
        match val {
            MoviePaginationSort::Asc => sea_orm::Order::Asc,
            MoviePaginationSort::Desc => sea_orm::Order::Desc,
        }
    }
}

/// Query parameters accepted by the movie listing endpoint
#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MoviePaginationRequest {
    /// 1-based page number
    pub page: Option<u64>,
    /// Page size, capped at 100
    pub per_page: Option<u64>,
    /// Free-text search over title and director
    pub search: Option<String>,
    /// Exact genre filter
    pub genre: Option<String>,
    /// Exact release year filter
    pub year: Option<i32>,
    /// Inclusive lower bound on the release year
    pub year_from: Option<i32>,
    /// Inclusive upper bound on the release year
    pub year_to: Option<i32>,
    pub order: Option<MoviePaginationOrder>,
    pub sort: Option<MoviePaginationSort>,
}

impl MoviePaginationRequest {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u64 {
        self.per_page.unwrap_or(15).clamp(1, 100)
    }

    pub fn offset(&self) -> u64 {
        (self.page() - 1) * self.limit()
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn order(&self) -> MoviePaginationOrder {
        self.order.unwrap_or_default()
    }

    pub fn sort(&self) -> MoviePaginationSort {
        self.sort.unwrap_or_default()
    }
}

/// One page of the movie listing
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct MoviePaginationResponse {
    /// Number of records matching the filters
    pub total: u64,
    pub page: u64,
    /// Number of pages at the current page size
    pub pages: u64,
    pub data: Vec<Movie>,
}

/// Acknowledgement returned after a delete
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct MovieDeleted {
    pub id: i32,
}
