pub type ContentResult<T> = Result<T, ContentException>;

#[derive(Debug, thiserror::Error)]
pub enum ContentException {
    #[error("Department not found: {id}")]
    DepartmentNotFound { id: i64 },

    #[error("Department {id} still has child departments")]
    DepartmentHasChildren { id: i64 },

    #[error("Banner not found: {id}")]
    BannerNotFound { id: i64 },

    #[error("Favorite not found: {id}")]
    FavoriteNotFound { id: i64 },

    #[error("Favorite {id} belongs to another user")]
    Forbidden { id: i64 },

    #[error("{message}")]
    Validation { message: String },

    #[error("Content internal error: {source}")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl ContentException {
    pub fn status(&self) -> u16 {
        match self {
            Self::DepartmentNotFound { .. }
            | Self::BannerNotFound { .. }
            | Self::FavoriteNotFound { .. } => 404,
            Self::DepartmentHasChildren { .. } => 409,
            Self::Forbidden { .. } => 403,
            Self::Validation { .. } => 400,
            Self::Internal { .. } => 500,
        }
    }
}

impl From<anyhow::Error> for ContentException {
    fn from(e: anyhow::Error) -> Self {
        ContentException::Internal { source: e }
    }
}
