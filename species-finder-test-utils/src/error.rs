use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    RedisError(#[from] fred::error::Error),
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
}
