use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;

use flipvid_application::error::{AppError, BError};
use flipvid_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

use super::view;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        Self::App(err.into())
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

fn status_of(err: &AppError) -> Option<Status> {
    let AppError::Business(err) = err else {
        return None;
    };
    let status = match err {
        BError::Parameter(err) => match err {
            ParameterError::Unauthorized | ParameterError::Credentials => Status::Unauthorized,
            ParameterError::Forbidden => Status::Forbidden,
            ParameterError::Repo(RepoError::NotFound) => Status::NotFound,
            ParameterError::Repo(_) => return None,
            _ => Status::BadRequest,
        },
        BError::Repo(RepoError::NotFound) => Status::NotFound,
        BError::Repo(_) => return None,
    };
    Some(status)
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => match status_of(&err) {
                Some(status) => (status, view::error(status, &err.to_string())).respond_to(req),
                None => {
                    error!("Error: {err}");
                    Err(Status::InternalServerError)
                }
            },
            Error::Other(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}
